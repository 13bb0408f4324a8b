//! Default TOML config template with inline documentation comments.

/// Generate the default TOML config content with comments.
pub(crate) fn default_config_toml() -> String {
    r##"# Chat widget configuration
# Schema version 1
# Only override what you want to change -- missing fields use defaults.

[server]
# url = "http://localhost:5005"
# webhook_path = "/webhooks/rest/webhook"
# request_timeout = 20   # seconds, 1-300
# connect_timeout = 10   # seconds, 1-120

[inactivity]
# warn_after = 600       # seconds idle before the warning, 1-86400
# terminate_after = 120  # seconds after the warning before auto-end, 1-86400

[pacing]
# reply_delay_ms = 300          # between consecutive agent replies, 0-5000
# suggestions_delay_ms = 1000
# restart_offer_delay_ms = 3000
# badge_delay_ms = 3000

[messages]
# greeting = "Bonjour {name}! Je suis ravi de vous aider."
# suggestions = ""              # empty disables the hint
# fallback = "Désolé, je n'ai pas compris. Pouvez-vous reformuler?"
# transport_error = "Désolé, une erreur est survenue. Veuillez réessayer."
# inactivity_warning = "Vous avez été inactif pendant {idle_minutes} minutes."
# farewell = "Merci et à bientôt!"
# auto_farewell = "Session terminée automatiquement après inactivité."
# name_required = "Veuillez entrer votre nom"
# introduction = "Bonjour, je m'appelle {name}"
# introduce_to_agent = false

[logging]
# level = "INFO"         # DEBUG, INFO, WARNING, ERROR
"##
    .to_string()
}
