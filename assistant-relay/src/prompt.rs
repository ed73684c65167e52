use crate::message::HospitalSummary;
use std::fmt::Write;

/// Render the nearest-hospital block appended to the system instruction.
///
/// Empty input renders nothing; the instruction then simply has no hospital
/// list for the model to cite.
fn hospital_context(hospitals: &[HospitalSummary]) -> String {
    if hospitals.is_empty() {
        return String::new();
    }

    let mut block = String::from("\n\nNearby hospitals available to the user:\n");
    for (index, hospital) in hospitals.iter().enumerate() {
        let distance = hospital.distance.as_deref().unwrap_or("distance unknown");
        let _ = writeln!(
            block,
            "{}. {} ({} away) - Services: {}",
            index + 1,
            hospital.name,
            distance,
            hospital.services.join(", ")
        );
    }
    block.truncate(block.trim_end().len());
    block
}

/// Build the system instruction for one relay call.
///
/// Pins the reply language and the required answer shape: possible causes,
/// first-aid steps, when to seek urgent care, and the supplied hospitals.
pub fn system_prompt(language: &str, hospitals: &[HospitalSummary]) -> String {
    format!(
        "You are an AI health assistant for underserved communities.\n\
         \n\
         CRITICAL INSTRUCTIONS:\n\
         - User is speaking in language code: {language}\n\
         - Respond ONLY in {language}, never in English\n\
         - Extract health symptoms and conditions from user input\n\
         - Provide clear, actionable advice in simple language\n\
         - Include:\n\
           1. Possible causes\n\
           2. First aid steps\n\
           3. When to seek immediate care\n\
           4. ALWAYS suggest the 2 nearest hospitals from the list below at the end of your response\n\
         - Use bullet points and clear formatting\n\
         - Be compassionate and reassuring\n\
         - Prioritize safety - always recommend professional care when serious\n\
         {context}\n\
         \n\
         Base your responses on reliable health information from WHO, government health departments, and medical guidelines.",
        context = hospital_context(hospitals),
    )
}
