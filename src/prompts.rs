use std::collections::HashMap;

/// System prompts live on the backend for security & centralized control.
const TRIAGE_PROMPT: &str = r#"You are an advanced medical triage AI assistant called MediLink.
Your goal is to assess patient symptoms and categorize them into: EMERGENCY, URGENT, or ROUTINE.

Output ONLY valid JSON in this exact format (no markdown, no code blocks):
{
  "severity": "emergency" | "urgent" | "routine",
  "recommendation": "Clear action step",
  "response": "Empathetic natural language response",
  "suggested_specialty": "e.g. Cardiology, Dermatology"
}

CRITICAL RULES:
- If user mentions chest pain, difficulty breathing, severe bleeding, stroke symptoms, or loss of consciousness: severity MUST be "emergency"
- If user mentions high fever (>103°F), severe pain, or sudden vision changes: severity should be "urgent"
- For mild symptoms or routine concerns: severity should be "routine"
- Always be empathetic and clear
- Never diagnose - only triage and recommend appropriate care level
- Response must be valid JSON with no extra text"#;

const RECOVERY_PROMPT: &str = r#"You are a compassionate post-operative recovery nurse assistant.
The patient is recovering from a medical procedure.
Generate ONE empathetic follow-up question based on their previous response.
Keep it conversational and under 20 words.
Focus on: pain levels, mobility, medication adherence, or emotional wellbeing.
Do not output JSON - just natural language text."#;

// Both agents currently run on the same model; the per-agent mapping is the
// extension point for when they diverge.
const DEFAULT_MODEL: &str = "gemini-1.5-flash";

/// System prompt plus the model that serves it, selected per agent type.
#[derive(Debug, Clone, Copy)]
pub struct PromptEntry {
    pub system_prompt: &'static str,
    pub model: &'static str,
}

/// Read-only mapping from agent type to prompt entry, built once at startup.
/// Unknown agent types fall back to TRIAGE.
#[derive(Debug)]
pub struct PromptRegistry {
    entries: HashMap<&'static str, PromptEntry>,
    default: PromptEntry,
}

impl PromptRegistry {
    pub fn new() -> Self {
        let triage = PromptEntry {
            system_prompt: TRIAGE_PROMPT,
            model: DEFAULT_MODEL,
        };
        let recovery = PromptEntry {
            system_prompt: RECOVERY_PROMPT,
            model: DEFAULT_MODEL,
        };

        let mut entries = HashMap::new();
        entries.insert("TRIAGE", triage);
        entries.insert("RECOVERY", recovery);

        Self {
            entries,
            default: triage,
        }
    }

    /// Always succeeds; agent types outside the registry get the default
    /// (TRIAGE) entry, no validation is performed on the input.
    pub fn lookup(&self, agent_type: &str) -> &PromptEntry {
        self.entries.get(agent_type).unwrap_or(&self.default)
    }
}

impl Default for PromptRegistry {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_agent_types_resolve_to_their_prompts() {
        let registry = PromptRegistry::new();
        assert_eq!(registry.lookup("TRIAGE").system_prompt, TRIAGE_PROMPT);
        assert_eq!(registry.lookup("RECOVERY").system_prompt, RECOVERY_PROMPT);
    }

    #[test]
    fn unknown_agent_types_fall_back_to_triage() {
        let registry = PromptRegistry::new();
        for agent_type in ["BILLING", "triage", "", "🤖"] {
            assert_eq!(
                registry.lookup(agent_type).system_prompt,
                TRIAGE_PROMPT,
                "agent_type {agent_type:?} should fall back to TRIAGE"
            );
        }
    }

    #[test]
    fn both_agent_types_use_the_same_model() {
        let registry = PromptRegistry::new();
        assert_eq!(registry.lookup("TRIAGE").model, "gemini-1.5-flash");
        assert_eq!(registry.lookup("RECOVERY").model, "gemini-1.5-flash");
    }
}
