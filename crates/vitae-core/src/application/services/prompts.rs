// Prompt constants for the AI assistant.
// The product's prompts are written in Dutch; model replies are passed through
// in whatever language the model answers.

/// System prompt for turning raw PDF text into the resume JSON schema.
pub const EXTRACT_SYSTEM: &str = r#"
Je bent een CV-analyse AI. Je taak is om ruwe tekst uit een PDF te converteren
naar een gestructureerde JSON voor een CV-maker app.

Gebruik dit schema:

{
  "name": "",
  "title": "",
  "summary": "",
  "experience": [
    {
      "role": "",
      "company": "",
      "period": "",
      "bullets": []
    }
  ],
  "projects": [
    {
      "name": "",
      "period": "",
      "description": ""
    }
  ],
  "education": [
    {
      "degree": "",
      "school": "",
      "period": ""
    }
  ],
  "skills": [],
  "languages": [],
  "hobbies": [],
  "contact": {
    "phone": "",
    "email": "",
    "location": ""
  }
}
"#;

pub const REWRITE_SYSTEM: &str =
    "Je herschrijft tekst volgens instructies. Houd het professioneel en beknopt.";

pub const REGENERATE_SYSTEM: &str = "Je genereert professionele CV-tekst voor één veld.";

pub const SUMMARY_SYSTEM: &str = "Je schrijft een krachtige professionele CV-samenvatting.";

/// Marker stored in a failed extraction.
pub const EXTRACT_PARSE_FAILED: &str = "AI kon JSON niet parsen";

pub fn extract_user(raw_text: &str) -> String {
    format!("Zet deze PDF-tekst om naar JSON:\n\n{raw_text}")
}

pub fn rewrite_user(text: &str, instruction: &str) -> String {
    format!("Originele tekst:\n{text}\n\nInstructie:\n{instruction}")
}

pub fn regenerate_user(field: &str, resume_json: &str) -> String {
    format!("\nGenereer het veld '{field}' opnieuw op basis van deze CV:\n\n{resume_json}\n")
}

pub fn summary_user(resume_json: &str) -> String {
    format!("Schrijf een samenvatting voor deze persoon:\n\n{resume_json}")
}
