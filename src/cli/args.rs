/// CLI argument definitions via clap derive.
use std::path::PathBuf;

use clap::{Parser, ValueEnum};

use crate::client::Method;
use crate::client::pipeline::DEFAULT_BASE_URL;

/// restcli — send one GET or POST to a REST API and dump the JSON response.
#[derive(Debug, Parser)]
#[command(
    name = "restcli",
    about = "Simple command-line REST client for JSONPlaceholder",
    version,
    arg_required_else_help = true
)]
pub struct Cli {
    /// Request method.
    #[arg(value_enum)]
    pub method: MethodArg,

    /// Request endpoint URI fragment, appended verbatim to the base URL.
    pub endpoint: String,

    /// JSON body to send with the request (required for post, ignored for get).
    #[arg(short = 'd', long, value_name = "JSON")]
    pub data: Option<String>,

    /// Output to a .json or .csv file (default: dump to stdout).
    #[arg(short = 'o', long, value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// API base URL the endpoint is appended to.
    #[arg(
        long,
        env = "RESTCLI_BASE_URL",
        value_name = "URL",
        default_value = DEFAULT_BASE_URL
    )]
    pub base_url: String,

    /// Print errors as a JSON envelope on stderr.
    #[arg(long)]
    pub json_errors: bool,

    /// Log request details and timings to stderr.
    #[arg(long)]
    pub debug: bool,
}

/// Methods accepted on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum MethodArg {
    /// HTTP GET, no body.
    Get,
    /// HTTP POST with a JSON body from `-d/--data`.
    Post,
}

impl From<MethodArg> for Method {
    fn from(arg: MethodArg) -> Self {
        match arg {
            MethodArg::Get => Self::Get,
            MethodArg::Post => Self::Post,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_get_with_output() {
        let cli = Cli::try_parse_from(["restcli", "get", "/posts", "-o", "out.csv"]).unwrap();
        assert_eq!(cli.method, MethodArg::Get);
        assert_eq!(cli.endpoint, "/posts");
        assert_eq!(cli.output, Some(PathBuf::from("out.csv")));
        assert_eq!(cli.data, None);
        assert!(!cli.json_errors);
    }

    #[test]
    fn test_parse_post_with_long_data() {
        let cli = Cli::try_parse_from([
            "restcli",
            "post",
            "/posts",
            "--data",
            r#"{"title":"a"}"#,
            "--base-url",
            "http://localhost:8080",
        ])
        .unwrap();
        assert_eq!(Method::from(cli.method), Method::Post);
        assert_eq!(cli.data.as_deref(), Some(r#"{"title":"a"}"#));
        assert_eq!(cli.base_url, "http://localhost:8080");
    }

    #[test]
    fn test_post_without_data_parses() {
        // Missing payload is reported by the pipeline, not by clap.
        let cli = Cli::try_parse_from(["restcli", "post", "/posts"]).unwrap();
        assert_eq!(cli.data, None);
    }

    #[test]
    fn test_rejects_unknown_method() {
        assert!(Cli::try_parse_from(["restcli", "delete", "/posts/1"]).is_err());
    }

    #[test]
    fn test_endpoint_is_required() {
        assert!(Cli::try_parse_from(["restcli", "get"]).is_err());
    }
}
