use crate::conf::AnalyzerConfig;

/// Render a configuration as an HCL document that `parse_config` reads back.
pub fn render_hcl(cfg: &AnalyzerConfig) -> String {
    let mut out = String::new();

    out.push_str("# fedlog configuration\n\n");
    out.push_str(&format!(
        "results_file   = {}\n",
        quote(&cfg.results_file.to_string_lossy())
    ));
    out.push_str(&format!("report_title   = {}\n", quote(&cfg.report_title)));
    out.push_str(&format!("run_dir_prefix = {}\n", quote(&cfg.run_dir_prefix)));
    out.push_str(&format!("cli_log_glob   = {}\n", quote(&cfg.cli_log_glob)));
    out.push_str(&format!("peer_log_glob  = {}\n", quote(&cfg.peer_log_glob)));
    out.push_str(&format!("success_marker = {}\n", quote(&cfg.success_marker)));

    out.push_str("\n# The first version is the baseline every other version is compared to.\n");
    let versions: Vec<String> = cfg
        .versions
        .iter()
        .map(|v| {
            let dir = v
                .dir
                .as_ref()
                .map(|d| format!(", dir = {}", quote(d)))
                .unwrap_or_default();
            format!(
                "  {{ label = {}{dir}, display_name = {} }}",
                quote(&v.label),
                quote(&v.display_name)
            )
        })
        .collect();
    out.push_str(&format!("versions = [\n{}\n]\n", versions.join(",\n")));

    out.push_str("\n# Phrases are matched case-insensitively against every log line.\n");
    let issues: Vec<String> = cfg
        .known_issues
        .iter()
        .map(|issue| {
            format!(
                "  {{ phrase = {}, label = {} }}",
                quote(&issue.phrase),
                quote(&issue.label)
            )
        })
        .collect();
    out.push_str(&format!("known_issues = [\n{}\n]\n", issues.join(",\n")));

    out
}

fn quote(s: &str) -> String {
    let mut out = String::with_capacity(s.len() + 2);
    out.push('"');
    let mut chars = s.chars().peekable();
    while let Some(c) = chars.next() {
        match c {
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            // `${` and `%{` would otherwise start a template sequence
            '$' | '%' if chars.peek() == Some(&'{') => {
                out.push(c);
                out.push(c);
            }
            _ => out.push(c),
        }
    }
    out.push('"');
    out
}
