//! Output formatting utilities

/// Format the manifest of exported files for display.
pub fn format_manifest(files: &[String]) -> String {
    let mut output = String::new();
    output.push_str("###### FILES FOUND ######\n");
    for file in files {
        output.push_str(file);
        output.push('\n');
    }
    output.push_str("######################\n");
    output
}

/// Format a list of tags for display.
pub fn format_tag_list(tags: &[String]) -> String {
    if tags.is_empty() {
        return "No tags found".to_string();
    }

    let mut output = String::new();
    for tag in tags {
        output.push_str(&format!("#{}\n", tag));
    }

    output
}
