use crate::input_utils;
use crate::output_utils;
use crate::Cli;
use crate::CommandResult;
use crate::RunnableCommand;
use coke_parser::token_source::StrGraphQLTokenSource;
use coke_parser::GraphQLParser;
use std::collections::HashSet;
use std::path::Path;
use std::path::PathBuf;
use walkdir::WalkDir;

#[derive(Debug, clap::Args)]
pub(crate) struct CheckCmd {
    #[arg(
        default_values_t=[
            "graphql".to_string(),
            "gql".to_string(),
        ],
        help="Set of file extensions to filter to when searching for files \
             within a directory.",
        long,
        value_delimiter = ',',
    )]
    graphql_file_exts: Vec<String>,

    #[arg(
        help="Paths to one or more GraphQL files or directories containing \
             GraphQL files which need to be checked.",
        name="FILE_OR_DIR_PATHS",
        required=true,
    )]
    file_or_dir_paths: Vec<PathBuf>,
}

/// The result of checking one file.
#[derive(Debug)]
struct FileOutcome {
    path: PathBuf,
    result: Result<usize, String>,
}

#[inherent::inherent]
impl RunnableCommand for CheckCmd {
    pub async fn run(self, cli: Cli) -> CommandResult {
        let graphql_file_exts = normalize_file_exts(&self.graphql_file_exts);

        log::debug!(
            "Scanning {} input paths...",
            self.file_or_dir_paths.len(),
        );
        let mut walk_errors = vec![];
        let mut num_skipped_files: usize = 0;
        let mut file_paths = vec![];
        for path in &self.file_or_dir_paths {
            for entry in WalkDir::new(path.as_path()).follow_links(true) {
                match entry {
                    Ok(entry) => {
                        let path = entry.path();
                        if !entry.file_type().is_file() {
                            log::trace!("Skipping non-file: {path:#?}.");
                        } else if has_graphql_ext(path, &graphql_file_exts) {
                            log::trace!("Found GraphQL file at {path:#?}.");
                            file_paths.push(path.to_path_buf());
                        } else {
                            log::trace!("Skipping non-GraphQL file: {path:#?}.");
                            num_skipped_files += 1;
                        }
                    },

                    Err(e) => {
                        log::trace!(
                            "Encountered an error while iterating recursive \
                            filesystem entities at/under {path:#?}."
                        );
                        walk_errors.push(e.to_string());
                    },
                }
            }
        }

        // A single file named explicitly is checked even when its extension
        // is not one of `--graphql-file-exts`.
        if file_paths.is_empty()
            && self.file_or_dir_paths.len() == 1
            && let Some(first_arg_path) = self.file_or_dir_paths.first()
            && first_arg_path.is_file() {
            log::warn!(
                "Proceeding to check {first_arg_path:#?} even though it \
                doesn't match any of the --graphql-file-exts ({}).",
                graphql_file_exts.iter()
                    .map(|ext| format!("`{ext}`"))
                    .collect::<Vec<_>>()
                    .join(", "),
            );
            num_skipped_files = num_skipped_files.saturating_sub(1);
            file_paths.push(first_arg_path.to_owned());
        }

        log::debug!("Found {} GraphQL files to be checked.", file_paths.len());

        let outcomes = check_files(file_paths, cli.max_input_bytes).await;
        summarize(&outcomes, num_skipped_files, &walk_errors)
    }
}

/// Lowercases extensions and strips any leading `.`.
fn normalize_file_exts(exts: &[String]) -> HashSet<String> {
    exts.iter()
        .map(|ext| ext.trim_start_matches('.').to_ascii_lowercase())
        .collect()
}

fn has_graphql_ext(path: &Path, graphql_file_exts: &HashSet<String>) -> bool {
    path.extension()
        .map(|ext| ext.to_string_lossy().to_ascii_lowercase())
        .is_some_and(|ext| graphql_file_exts.contains(&ext))
}

/// Parses every file on the blocking thread pool. Outcomes are returned
/// sorted by path.
async fn check_files(file_paths: Vec<PathBuf>, max_input_bytes: u64) -> Vec<FileOutcome> {
    let mut tasks = tokio::task::JoinSet::new();
    for path in file_paths {
        tasks.spawn_blocking(move || check_file(path, max_input_bytes));
    }

    let mut outcomes = vec![];
    while let Some(joined) = tasks.join_next().await {
        match joined {
            Ok(outcome) => outcomes.push(outcome),
            Err(e) => log::warn!("A file check task failed to complete: {e}"),
        }
    }
    outcomes.sort_by(|a, b| a.path.cmp(&b.path));
    outcomes
}

/// Reads and parses one file, returning the number of definitions or a
/// formatted diagnostic.
fn check_file(path: PathBuf, max_input_bytes: u64) -> FileOutcome {
    log::trace!("Checking {path:#?}...");
    let source = match input_utils::read_input(&path, max_input_bytes) {
        Ok(source) => source,
        Err(e) => {
            let message = format!("error: {e:#}\n");
            return FileOutcome { path, result: Err(message) };
        },
    };

    let token_source = StrGraphQLTokenSource::with_file_path(&source, &path);
    let result = GraphQLParser::from_token_source(token_source)
        .parse_document()
        .map(|doc| doc.definitions.len())
        .map_err(|e| e.format_detailed(Some(&source)));
    FileOutcome { path, result }
}

fn summarize(
    outcomes: &[FileOutcome],
    num_skipped_files: usize,
    walk_errors: &[String],
) -> CommandResult {
    let mut diagnostics = String::new();
    let mut num_definitions = 0;
    let mut num_failed_files = 0;
    for outcome in outcomes {
        match &outcome.result {
            Ok(count) => num_definitions += count,
            Err(diagnostic) => {
                num_failed_files += 1;
                diagnostics.push_str(diagnostic);
                diagnostics.push('\n');
            },
        }
    }
    for walk_error in walk_errors {
        diagnostics.push_str(&format!("error: {walk_error}\n\n"));
    }

    if num_failed_files == 0 && walk_errors.is_empty() {
        return CommandResult::stdout(format_args!(
            concat!(
                "{} All GraphQL parsed successfully:\n",
                "  * Checked {} files.\n",
                "  * Skipped {} non-graphql files.\n",
                "  * Parsed {} definitions.",
            ),
            output_utils::GREEN_CHECK,
            outcomes.len(),
            num_skipped_files,
            num_definitions,
        ));
    }

    let summary = format!(
        concat!(
            "{} GraphQL syntax errors found:\n",
            "  * {} of {} files failed to parse.\n",
            "  * {} paths could not be read.",
        ),
        output_utils::RED_X,
        num_failed_files,
        outcomes.len(),
        walk_errors.len(),
    );
    CommandResult::failure_with_stdout(summary, diagnostics.trim_end().to_string())
}

#[cfg(test)]
mod tests {
    use super::check_file;
    use super::CheckCmd;
    use super::has_graphql_ext;
    use super::normalize_file_exts;
    use super::summarize;
    use super::FileOutcome;
    use crate::Cli;
    use std::io::Write;
    use std::path::Path;
    use std::path::PathBuf;
    use std::process::ExitCode;

    fn write_temp(name: &str, contents: &str) -> PathBuf {
        let path = std::env::temp_dir()
            .join(format!("coke-check-{}-{name}", std::process::id()));
        let mut file = std::fs::File::create(&path).unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        path
    }

    /// Extensions match with or without a leading dot, case-insensitively.
    #[test]
    fn file_ext_matching() {
        let exts = normalize_file_exts(&[".graphql".to_string(), "GQL".to_string()]);
        assert!(has_graphql_ext(Path::new("a/b.graphql"), &exts));
        assert!(has_graphql_ext(Path::new("a/b.Gql"), &exts));
        assert!(!has_graphql_ext(Path::new("a/b.json"), &exts));
        assert!(!has_graphql_ext(Path::new("a/graphql"), &exts));
    }

    /// Valid files report their definition count.
    #[test]
    fn check_valid_file() {
        let path = write_temp("valid.graphql", "{ a }\nfragment F on T { b }");
        let outcome = check_file(path.clone(), 1024);
        assert_eq!(outcome.result, Ok(2));
        std::fs::remove_file(path).unwrap();
    }

    /// Invalid files report a diagnostic naming the file and location.
    #[test]
    fn check_invalid_file() {
        let path = write_temp("invalid.graphql", "{ f(a 1) }");
        let outcome = check_file(path.clone(), 1024);
        let diagnostic = outcome.result.unwrap_err();
        assert!(diagnostic.starts_with("error: "), "{diagnostic}");
        assert!(diagnostic.contains(&format!("{}:1:", path.display())), "{diagnostic}");
        std::fs::remove_file(path).unwrap();
    }

    /// Oversized files are rejected before parsing.
    #[test]
    fn check_oversized_file() {
        let path = write_temp("big.graphql", "{ a b c d e f }");
        let outcome = check_file(path.clone(), 4);
        assert!(outcome.result.unwrap_err().contains("maximum input size"));
        std::fs::remove_file(path).unwrap();
    }

    /// Any failed file makes the whole run fail.
    #[test]
    fn summary_exit_codes() {
        let ok = FileOutcome { path: PathBuf::from("a.graphql"), result: Ok(3) };
        let result = summarize(&[ok], 1, &[]);
        assert_eq!(format!("{:?}", result.exit_code), format!("{:?}", ExitCode::SUCCESS));
        let stdout = result.stdout.unwrap();
        assert!(stdout.contains("Checked 1 files"), "{stdout}");
        assert!(stdout.contains("Parsed 3 definitions"), "{stdout}");

        let failed = FileOutcome {
            path: PathBuf::from("b.graphql"),
            result: Err("error: boom\n".to_string()),
        };
        let result = summarize(&[failed], 0, &[]);
        assert_eq!(format!("{:?}", result.exit_code), format!("{:?}", ExitCode::FAILURE));
        assert_eq!(result.stderr.as_deref(), Some("error: boom"));
    }

    fn test_cli() -> Cli {
        Cli {
            cmd: None,
            max_input_bytes: 1024,
            verbose: false,
        }
    }

    fn check_cmd(paths: Vec<PathBuf>) -> CheckCmd {
        CheckCmd {
            graphql_file_exts: vec!["graphql".to_string()],
            file_or_dir_paths: paths,
        }
    }

    /// Walking a directory checks matching files and counts the rest as
    /// skipped.
    #[tokio::test]
    async fn run_counts_skipped_files_in_directory() {
        let dir = std::env::temp_dir()
            .join(format!("coke-check-{}-dir", std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();
        std::fs::write(dir.join("a.graphql"), "{ a }").unwrap();
        std::fs::write(dir.join("notes.txt"), "not graphql").unwrap();

        let result = check_cmd(vec![dir.clone()]).run(test_cli()).await;
        let stdout = result.stdout.unwrap();
        assert!(stdout.contains("Checked 1 files"), "{stdout}");
        assert!(stdout.contains("Skipped 1 non-graphql files"), "{stdout}");
        std::fs::remove_dir_all(dir).unwrap();
    }

    /// A single explicitly named file is checked despite its extension,
    /// and is not counted as skipped.
    #[tokio::test]
    async fn run_checks_explicit_file_with_other_extension() {
        let path = write_temp("explicit.txt", "{ a b }");
        let result = check_cmd(vec![path.clone()]).run(test_cli()).await;
        assert_eq!(format!("{:?}", result.exit_code), format!("{:?}", ExitCode::SUCCESS));
        let stdout = result.stdout.unwrap();
        assert!(stdout.contains("Checked 1 files"), "{stdout}");
        assert!(stdout.contains("Skipped 0 non-graphql files"), "{stdout}");
        std::fs::remove_file(path).unwrap();
    }
}
