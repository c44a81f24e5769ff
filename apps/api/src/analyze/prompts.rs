// Prompt constants for the analysis relay. The scorecard schema block is
// embedded verbatim so the provider mirrors the shape `Feedback` parses.

/// Target schema description embedded in every analysis prompt.
pub const FEEDBACK_FORMAT: &str = r#"
interface Feedback {
  overallScore: number; //max 100
  ATS: {
    score: number;
    tips: {
      type: "good" | "improve";
      tip: string;
    }[];
  };
  toneAndStyle: {
    score: number;
    tips: {
      type: "good" | "improve";
      tip: string;
      explanation: string;
    }[];
  };
  content: {
    score: number;
    tips: {
      type: "good" | "improve";
      tip: string;
      explanation: string;
    }[];
  };
  structure: {
    score: number;
    tips: {
      type: "good" | "improve";
      tip: string;
      explanation: string;
    }[];
  };
  skills: {
    score: number;
    tips: {
      type: "good" | "improve";
      tip: string;
      explanation: string;
    }[];
  };
}"#;

/// Fixed expert-framing instructions for a target job.
pub fn prepare_instructions(job_title: &str, job_description: &str) -> String {
    format!(
        "You are an expert in ATS (Applicant Tracking System) and resume analysis.\n\
         Please analyze and rate this resume and suggest how to improve it.\n\
         The rating can be low if the resume is bad.\n\
         Be thorough and detailed. Don't be afraid to point out any mistakes or areas for improvement.\n\
         If there is a lot to improve, don't hesitate to give low scores. This is to help the user to improve their resume.\n\
         If available, use the job description for the job user is applying to to give more detailed feedback.\n\
         If provided, take the job description into consideration.\n\
         The job title is: {job_title}\n\
         The job description is: {job_description}\n\
         Provide the feedback using the following format:\n\
         {FEEDBACK_FORMAT}\n\
         Return the analysis as an JSON object, without any other text and without the backticks.\n\
         Do not include any other text or comments."
    )
}

/// Full analysis prompt: instructions plus the extracted resume text,
/// concatenated as one block.
pub fn build_analysis_prompt(
    resume_text: &str,
    job_title: &str,
    job_description: &str,
) -> String {
    format!(
        "{}\n\nRESUME TEXT (extracted):\n{}",
        prepare_instructions(job_title, job_description),
        resume_text
    )
}
