// Shared prompt fragments. Each service that calls the LLM keeps its own
// prompts.rs alongside it; only cross-cutting text lives here.

/// System prompt fragment that enforces JSON-only output.
pub const JSON_ONLY_SYSTEM: &str = "You are a precise, structured assistant. \
    You MUST respond with valid JSON only. \
    Do NOT include any text outside the JSON object. \
    Do NOT use markdown code fences. \
    Do NOT include explanations or apologies.";

/// Common instruction for every rewrite of user-supplied data.
pub const NO_INVENTION_INSTRUCTION: &str = "\
    CRITICAL: You are editing, not authoring. Do NOT add any skill, job, project, \
    employer, date, metric or credential that is not already present in the input. \
    If the input does not support a claim, leave it out.";
