//! The summarization prompt.

/// Build the prompt for one chapter. The template branches on chapter kind
/// (introductory/overview vs deep dive) and pins down the output format the
/// sanitizer expects.
pub fn build_prompt(chapter_name: &str, chapter_text: &str) -> String {
    format!(
        "You are a technical summarizer creating a detailed LaTeX report for a chapter, \
for an expert in statistics and machine learning.\n\
Based on the content of the chapter titled '{chapter_name}', generate a 1-page summary formatted in LaTeX:\n\
\n\
If the chapter is introductory/overview:\n\
1. Provide a motivating example in 1 rich paragraph. If the example is in the chapter use that.\n\
2. Include a comprehensive laundry list of solutions or methods in concise bullet points. Add sub-bullets if needed.\n\
3. Do not add any conclusion.\n\
\n\
If the chapter is a deep dive into a problem:\n\
1. State the problem the chapter is trying to resolve.\n\
2. Provide a motivating example with rich context (1 paragraph). If the example is in the chapter use that.\n\
3. Present the solutions as detailed bullets (each bullet should be 2-3 lines). Add sub-bullets if needed.\n\
4. Do NOT add any generic conclusion.\n\
\n\
Do NOT use textbf. Keep headers short. Do not refer to the chapter (\"Chapter X says...\", \"Chapter Y delves...\").\n\
Ensure the summary fits within a single page and uses only valid LaTeX commands. \
Do not include any markdown code fences or markdown formatting. Only output valid LaTeX code. \
Replace all headers with \\subsubsection* except for chapter titles. \
Do not use any optional arguments in LaTeX environments.\n\
\n\
Chapter Text:\n\
{chapter_text}\n"
    )
}
