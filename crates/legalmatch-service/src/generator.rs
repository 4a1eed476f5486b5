//! A stand-in content generator returning canned legal text.
//!
//! The prompt (existing content, else the section title) is matched
//! case-insensitively against a fixed list of trigger words; the first hit
//! selects a canned paragraph. Anything else gets a generic paragraph that
//! echoes the case context and the prompt. The mock never fails.

use std::time::Duration;

use legalmatch_core::{
  Result,
  generate::{ContentGenerator, GenerationRequest},
};

/// Artificial latency applied before every response.
pub const DEFAULT_LATENCY: Duration = Duration::from_millis(1000);

pub const INTRODUCTION: &str = "This engagement letter confirms that [Client Name] has engaged [Law Firm Name] to provide legal services related to [brief matter description] as described in more detail below.";

pub const SCOPE: &str = "Our representation will include the following services:\n\n1. Review and analysis of relevant documents\n2. Legal research related to [specific issues]\n3. Preparation of necessary legal documents\n4. Communication with relevant parties\n5. Representation in [specific proceedings/negotiations] as needed\n\nThis engagement does not include:\n- Representation in matters not specifically described above\n- Appeals of any decisions\n- Services related to tax consequences";

pub const FEES: &str = "Our fees for legal services will be calculated at the rate of $[X] per hour. You will be billed monthly for services rendered and expenses incurred. Payment is due within 30 days of the date of our invoice.\n\nIn addition to our fees, you will be responsible for expenses incurred on your behalf, including but not limited to filing fees, court costs, travel expenses, copying charges, and other necessary expenditures.";

pub const CLIENT: &str = "To assist us in representing you effectively, you agree to:\n\n1. Provide all relevant information and documents promptly\n2. Be truthful and complete in all communications\n3. Cooperate in preparing for meetings, hearings, or other proceedings\n4. Notify us promptly of any changes in contact information\n5. Pay invoices in a timely manner";

pub const CONCLUSION: &str = "If the terms of this engagement are acceptable to you, please sign and return this letter. We look forward to working with you on this matter.\n\nSincerely,\n\n[Lawyer Name]\n[Law Firm]\n\nI agree to the terms of this engagement letter:\n\n_______________________\n[Client Name]\nDate: ________________";

/// Checked in order; the first trigger contained in the prompt wins.
const RESPONSES: &[(&str, &str)] = &[
  ("introduction", INTRODUCTION),
  ("scope", SCOPE),
  ("fees", FEES),
  ("client", CLIENT),
  ("conclusion", CONCLUSION),
];

/// Pick the canned response for `prompt`, or build the generic one around
/// `context`.
pub fn canned_response(prompt: &str, context: &str) -> String {
  let lowered = prompt.to_lowercase();
  RESPONSES
    .iter()
    .find(|(trigger, _)| lowered.contains(*trigger))
    .map(|(_, text)| (*text).to_owned())
    .unwrap_or_else(|| {
      format!(
        "Based on the information provided regarding {context}, here's a draft for your consideration:\n\n{prompt}\n\nThis content addresses the key aspects of your request while maintaining compliance with standard legal practices. You may want to customize specific details to match your client's unique circumstances."
      )
    })
}

#[derive(Debug, Clone)]
pub struct MockGenerator {
  latency: Duration,
}

impl Default for MockGenerator {
  fn default() -> Self { Self::new(DEFAULT_LATENCY) }
}

impl MockGenerator {
  pub fn new(latency: Duration) -> Self { Self { latency } }

  pub fn latency(&self) -> Duration { self.latency }
}

impl ContentGenerator for MockGenerator {
  async fn generate(&self, request: &GenerationRequest) -> Result<String> {
    tokio::time::sleep(self.latency).await;
    Ok(canned_response(request.prompt(), &request.case_context))
  }
}
