use crate::schema::WidgetConfig;

use super::helpers::validate_not_blank;

/// Validate the visitor-facing strings that must always render something.
pub(crate) fn validate_messages(errors: &mut Vec<String>, config: &WidgetConfig) {
    let m = &config.messages;
    validate_not_blank(errors, "messages.greeting", &m.greeting);
    validate_not_blank(errors, "messages.fallback", &m.fallback);
    validate_not_blank(errors, "messages.transport_error", &m.transport_error);
    validate_not_blank(errors, "messages.inactivity_warning", &m.inactivity_warning);
    validate_not_blank(errors, "messages.farewell", &m.farewell);
    validate_not_blank(errors, "messages.auto_farewell", &m.auto_farewell);
    validate_not_blank(errors, "messages.name_required", &m.name_required);

    if m.introduce_to_agent {
        validate_not_blank(errors, "messages.introduction", &m.introduction);
    }
}
