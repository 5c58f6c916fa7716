//! Coarse technology-token tagging of free text.
//!
//! Substring containment against a fixed curated list, for retrieval
//! rather than truth: "restless" matching nothing and "javascript" also
//! matching "java" are both accepted outcomes.

/// Curated technology keywords, in output order. All lowercase.
pub const TECH_TOKENS: &[&str] = &[
    "aws",
    "gcp",
    "azure",
    "kubernetes",
    "docker",
    "terraform",
    "ansible",
    "lambda",
    "ec2",
    "s3",
    "dynamodb",
    "cloudfront",
    "postgres",
    "mysql",
    "sqlite",
    "redis",
    "kafka",
    "rabbitmq",
    "elasticsearch",
    "grpc",
    "graphql",
    "websocket",
    "http",
    "oauth",
    "saml",
    "react",
    "vue",
    "angular",
    "svelte",
    "node",
    "typescript",
    "javascript",
    "python",
    "rust",
    "golang",
    "java",
    "kotlin",
    "swift",
    "ruby",
    "rails",
    "django",
    "flask",
    "spring",
    "linux",
    "nginx",
    "jenkins",
    "airflow",
    "spark",
    "hadoop",
    "snowflake",
    "tensorflow",
    "pytorch",
    "llm",
];

/// Extract every token contained in `text` (case-insensitive substring
/// match), in list order. Deduplicated by construction since the list
/// has no repeats.
pub fn extract_tech_tokens(text: &str) -> Vec<&'static str> {
    let lowered = text.to_lowercase();
    TECH_TOKENS
        .iter()
        .copied()
        .filter(|token| lowered.contains(token))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_case_insensitive_substring_match() {
        let tokens = extract_tech_tokens("Migrated AWS Lambda functions");
        assert!(tokens.contains(&"aws"));
        assert!(tokens.contains(&"lambda"));
    }

    #[test]
    fn test_tokens_come_out_in_list_order() {
        let tokens = extract_tech_tokens("python on kubernetes behind nginx");
        assert_eq!(tokens, vec!["kubernetes", "python", "nginx"]);
    }

    #[test]
    fn test_no_match_yields_empty() {
        assert!(extract_tech_tokens("herded alpacas in the Andes").is_empty());
    }

    #[test]
    fn test_substring_false_positive_is_accepted() {
        // "javascript" contains "java"; both tokens are reported.
        let tokens = extract_tech_tokens("wrote JavaScript");
        assert_eq!(tokens, vec!["javascript", "java"]);
    }

    #[test]
    fn test_repeated_mentions_reported_once() {
        let tokens = extract_tech_tokens("docker docker docker");
        assert_eq!(tokens, vec!["docker"]);
    }
}
