// All LLM prompt constants for the generation module.

/// System prompt for resume content optimization.
pub const OPTIMIZE_SYSTEM: &str =
    "You are an expert resume writer who helps optimize resumes for maximum impact.";

/// Optimization prompt template.
/// Replace: {job_title}, {experience}, {skills}, {education}.
///
/// The reply contract is stated explicitly: exactly three sections separated
/// by blank lines, in a fixed order, so the positional parse in
/// `optimizer::parse_sections` has something to hold on to.
pub const OPTIMIZE_PROMPT_TEMPLATE: &str = r#"As an expert resume writer, optimize the following resume content:

Job Title: {job_title}

Experience:
{experience}

Skills:
{skills}

Education:
{education}

Please provide, in this exact order:
1. An optimized version of the experience section with strong action verbs and quantifiable achievements
2. Additional relevant skills that might be valuable for this role, as a single comma-separated line
3. A professional summary

Return exactly three sections separated by a single blank line. Do not add headings, numbering, or any other text."#;

/// System prompt for job market analysis.
pub const MARKET_SYSTEM: &str =
    "You are a job market analyst providing insights based on current trends.";

/// Market analysis prompt template. Replace `{skills}` before sending.
pub const MARKET_PROMPT_TEMPLATE: &str = r#"Analyze the job market for a candidate with the following skills:
{skills}

Please provide:
1. Top industries hiring for these skills
2. Suggested additional skills to learn
3. Estimated salary range"#;
