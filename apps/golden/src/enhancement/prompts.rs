// Enhancement LLM prompt templates.

pub const ENHANCE_SYSTEM: &str = "\
You are a resume editor that outputs perfectly structured JSON. \
You refine presentation only and never invent facts.";

pub const ENHANCE_PROMPT_TEMPLATE: &str = r#"You are a world-class professional resume editor and career coach.
Refine the following unified profile, which was aggregated from several sources (CV, LinkedIn, GitHub).

{no_invention_instruction}

INSTRUCTIONS:
1. DO NOT ADD NEW INFORMATION: no new skills, experiences, projects or details. Only improve the presentation of what is already there.
2. PROFESSIONAL SUMMARY: write a concise summary (2-4 sentences) of the candidate's key strengths, based ONLY on the provided skills, experience and projects.
3. WORK EXPERIENCE: rewrite each description to be professional and action-oriented. If a description is messy, structure it as bullet points starting with action verbs.
4. SKILLS: correct capitalization (e.g. "python" -> "Python", "javascript" -> "JavaScript") and keep the list consistent.
5. COHERENCE: the profile must read as one document, not a patchwork of sources.

Keep "profile_id" and "source_data" exactly as given.

UNIFIED PROFILE:
---
{profile_json}
---

Return ONE JSON object that strictly follows this JSON schema. No extra text, no explanations.

OUTPUT SCHEMA:
{schema_json}"#;
