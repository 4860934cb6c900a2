pub const DEFAULT_SOAP_PROMPT: &str = "You are an experienced clinician. The following audio is a recording of a consultation at a general practice. Summarize the recording as a medical record in SOAP format (Subjective, Objective, Assessment, Plan).";

/// The custom prompt if it has any content, otherwise the SOAP default.
pub fn resolve_prompt(custom: Option<&str>) -> &str {
    match custom.map(str::trim) {
        Some(text) if !text.is_empty() => text,
        _ => DEFAULT_SOAP_PROMPT,
    }
}
