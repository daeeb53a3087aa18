//! The fixed story prompt.

/// Build the story prompt, embedding the words verbatim in order.
pub fn build_prompt(word1: &str, word2: &str, word3: &str) -> String {
    format!(
        "Crie uma história MUITO engraçada e maluca usando estas três palavras:\n\
         1. {word1}\n\
         2. {word2}\n\
         3. {word3}\n\
         \n\
         A história deve ter:\n\
         - Humor\n\
         - Criatividade\n\
         - No mínimo 4 parágrafos curtos\n"
    )
}
