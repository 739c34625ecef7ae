// Feedback Generator LLM prompt templates.

pub const FEEDBACK_SYSTEM: &str = "\
You are an expert career coach. \
You review resumes and give concise, actionable feedback addressed to the candidate.";

pub const FEEDBACK_PROMPT_TEMPLATE: &str = "\
Review the following resume text and give concise, actionable feedback:
- Summarize key strengths (1-2 points)
- List specific improvement suggestions (3-5 bullet points)
- Mention how the candidate can improve formatting or clarity.

Resume text:
{resume_text}";
