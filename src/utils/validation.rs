use validator::ValidationErrors;

/// Picks the message to surface when a form fails validation. `field_order`
/// pins which field wins when several fail at once; the underlying error map
/// has no stable iteration order.
pub fn first_validation_message(errors: &ValidationErrors, field_order: &[&str]) -> String {
    let field_errors = errors.field_errors();

    for field in field_order {
        let Some(errs) = field_errors
            .iter()
            .find(|(name, _)| name.as_ref() == *field)
            .map(|(_, errs)| errs)
        else {
            continue;
        };

        if let Some(err) = errs.first() {
            return err
                .message
                .as_ref()
                .map(|msg| msg.to_string())
                .unwrap_or_else(|| format!("Invalid {field}"));
        }
    }

    "Validation failed".to_string()
}
