// CLI output formatting with consistent styling using colored.
// Plain println!/eprintln! keeps ANSI passthrough predictable.

use colored::Colorize as _;
use std::path::Path;

pub fn print_push_header() {
    println!("{}", "Template Sync".dimmed());
}

pub fn print_pull_header(lang: &str) {
    println!("{} ({})", "Translation Pull".dimmed(), lang.cyan());
}

pub fn print_project(name: &str) {
    println!("\n{} {}", "Project".dimmed(), name.yellow().bold());
}

pub fn print_command(command: &str) {
    println!("{} {}", "->".dimmed(), command);
}

pub fn print_fetching_version(name: &str) {
    println!("{} {}", "Fetching package version for".dimmed(), name.green());
}

pub fn print_checking_project(name: &str) {
    println!("{} {}", "Checking service project".dimmed(), name.green());
}

pub fn print_creating_project(name: &str) {
    println!("{} {}", "Creating service project".dimmed(), name.green());
}

pub fn print_checking_version(name: &str, version: &str) {
    println!(
        "{} {} {}",
        "Checking version".dimmed(),
        version.cyan(),
        format!("for {name}").dimmed()
    );
}

pub fn print_creating_version(name: &str, version: &str) {
    println!(
        "{} {} {}",
        "Creating version".dimmed(),
        version.cyan(),
        format!("for {name}").dimmed()
    );
}

pub fn print_copying(filename: &str) {
    println!("{} {}", "Copying".dimmed(), filename);
}

pub fn print_copying_dir(remote: &str, local: &Path) {
    println!(
        "{} {} {} {}",
        "Copying files from".dimmed(),
        remote,
        "to".dimmed(),
        local.display()
    );
}

pub fn print_validating(path: &Path) {
    println!("{} {}", "Validating".dimmed(), path.display());
}

pub fn print_fixing_duplicate(path: &Path, duplicate_line: usize, first_line: usize) {
    println!(
        "{} {} (line {} duplicates line {})",
        "Fixing duplicated entry in".yellow(),
        path.display(),
        duplicate_line,
        first_line
    );
}

pub fn print_uploading(name: &str) {
    println!("{} {}", "Uploading templates for".dimmed(), name.green());
}

pub fn print_pulling(name: &str, lang: &str) {
    println!(
        "{} {} {}",
        "Pulling".dimmed(),
        lang.cyan(),
        format!("catalogs for {name}").dimmed()
    );
}

pub fn print_generating_dict(name: &str, lang: &str) {
    println!(
        "{} {} {}",
        "Generating".dimmed(),
        format!("{lang} dictionary").cyan(),
        format!("for {name}").dimmed()
    );
}

pub fn print_no_translations(name: &str, lang: &str) {
    println!(
        "{} {} ({})",
        "No translations yet for".yellow(),
        name,
        lang
    );
}

pub fn print_deployed(name: &str, destination: &str) {
    println!(
        "{} {} {}",
        "Deployed".green(),
        name,
        format!("to {destination}").dimmed()
    );
}

pub fn print_remote_warning(command: &str, error: &anyhow::Error) {
    eprintln!(
        "{} {}: {}",
        "Prepare command failed".yellow(),
        command,
        error
    );
}

pub fn print_project_failed(name: &str, error: &dyn std::fmt::Display) {
    eprintln!(
        "{} {}: {}",
        "Skipping".red(),
        name.white().bold(),
        error
    );
}

pub fn print_unfixable(error: &dyn std::fmt::Display) {
    eprintln!("{}", "Cannot automatically fix error:".red());
    eprintln!("{error}");
}

pub fn print_validate_ok(count: usize) {
    println!("{} {} template(s)", "Validated".green(), count);
}
