//! Visitor-facing strings.
//!
//! Templates support `{name}` (greeting, introduction) and
//! `{idle_minutes}` / `{grace_minutes}` (inactivity warning).

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct MessagesConfig {
    /// Bot greeting appended right after identification.
    pub greeting: String,
    /// Follow-up hint after the greeting. Empty disables it.
    pub suggestions: String,
    /// Rendered when the agent answers with no text.
    pub fallback: String,
    /// Rendered when the agent cannot be reached.
    pub transport_error: String,
    pub inactivity_warning: String,
    /// Farewell after a visitor-initiated end.
    pub farewell: String,
    /// Farewell after an inactivity timeout.
    pub auto_farewell: String,
    /// Inline prompt shown when the name field is blank.
    pub name_required: String,
    /// Self-introduction relayed to the agent when `introduce_to_agent` is set.
    pub introduction: String,
    pub introduce_to_agent: bool,
}

impl Default for MessagesConfig {
    fn default() -> Self {
        Self {
            greeting: "Bonjour {name}! Je suis ravi de vous aider. \
                       Comment puis-je vous renseigner sur ExpoBeton RDC aujourd'hui?"
                .into(),
            suggestions: "💡 Vous pourriez me demander:\n\
                          • C'est quoi ExpoBeton?\n\
                          • Quelles sont les dates?\n\
                          • Comment devenir ambassadeur?"
                .into(),
            fallback: "Désolé, je n'ai pas compris. Pouvez-vous reformuler?".into(),
            transport_error: "Désolé, une erreur est survenue. Veuillez réessayer.".into(),
            inactivity_warning: "Vous avez été inactif pendant {idle_minutes} minutes. \
                                 La conversation sera terminée automatiquement dans \
                                 {grace_minutes} minutes si vous ne répondez pas."
                .into(),
            farewell: "👋 Merci d'avoir utilisé notre chatbot ExpoBeton RDC!\n\n\
                       📧 Un email avec le transcript a été envoyé à notre équipe.\n\n\
                       Si vous avez d'autres questions, n'hésitez pas à nous recontacter!\n\n\
                       À bientôt!"
                .into(),
            auto_farewell: "👋 Session terminée automatiquement après inactivité. \
                            Merci d'avoir utilisé notre chatbot ExpoBeton RDC!\n\n\
                            📧 Un email avec le transcript a été envoyé.\n\n\
                            À bientôt!"
                .into(),
            name_required: "Veuillez entrer votre nom".into(),
            introduction: "Bonjour, je m'appelle {name}".into(),
            introduce_to_agent: false,
        }
    }
}
