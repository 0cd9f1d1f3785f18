/// Kebab-cases `name` for use in ids and URLs: `PetFilter` becomes
/// `pet-filter`, `HTTPServer2` becomes `http-server-2` and `__Type` becomes
/// `type`.
pub fn slugify(name: &str) -> String {
    let mut words: Vec<String> = vec![];
    for chunk in name.split(|c: char| !c.is_alphanumeric()).filter(|c| !c.is_empty()) {
        let chars: Vec<char> = chunk.chars().collect();
        let mut word = String::new();
        for (idx, ch) in chars.iter().enumerate() {
            if idx > 0 && !word.is_empty() {
                let prev = chars[idx - 1];
                let next = chars.get(idx + 1);
                let starts_word =
                    (prev.is_lowercase() && ch.is_uppercase())
                    || (prev.is_alphabetic() && ch.is_numeric())
                    || (prev.is_numeric() && ch.is_alphabetic())
                    || (prev.is_uppercase()
                        && ch.is_uppercase()
                        && next.is_some_and(|next| next.is_lowercase()));
                if starts_word {
                    words.push(std::mem::take(&mut word));
                }
            }
            word.extend(ch.to_lowercase());
        }
        if !word.is_empty() {
            words.push(word);
        }
    }
    words.join("-")
}
