//! rail-score-cli: smoke-test and one-off calls against the RAIL Score API
//!
//! Usage:
//!   rail-score-cli health                                     Service health
//!   rail-score-cli version                                    Service version
//!   rail-score-cli calculate <text> [--domain D] [--explain]  Score a piece of content
//!   rail-score-cli generate <prompt> [--length L]             Generate scored content
//!   rail-score-cli methods                                    List client operations
//!   rail-score-cli smoke                                      Run the live test suite

use rail_score_sdk::blocking::RailScoreClient;
use rail_score_sdk::config::ENV_TIMEOUT_SECS;
use rail_score_sdk::{
    CalculateRequest, ClientConfig, ContentLength, Dimension, Domain, Endpoint, Error,
    GenerateRequest, GenerationContext, RailRequirements,
};
use std::time::Duration;
use tracing_subscriber::EnvFilter;

/// Generation can take well over the default timeout.
const SMOKE_TIMEOUT: Duration = Duration::from_secs(60);

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    let args: Vec<String> = std::env::args().collect();
    if args.len() < 2 {
        print_usage();
        std::process::exit(1);
    }

    let code = match args[1].as_str() {
        "health" => with_client(ClientConfig::from_env(), |c| cmd_health(c)),
        "version" => with_client(ClientConfig::from_env(), |c| cmd_version(c)),
        "calculate" => with_client(ClientConfig::from_env(), |c| cmd_calculate(c, &args[2..])),
        "generate" => with_client(ClientConfig::from_env(), |c| cmd_generate(c, &args[2..])),
        "smoke" => with_client(
            ClientConfig::from_env().and_then(|config| {
                smoke_config(config, std::env::var_os(ENV_TIMEOUT_SECS).is_some())
            }),
            cmd_smoke,
        ),
        "methods" => cmd_methods(),
        "help" | "--help" | "-h" => {
            print_usage();
            0
        }
        "--version" | "-V" => {
            println!("rail-score-cli {}", env!("CARGO_PKG_VERSION"));
            0
        }
        other => {
            eprintln!("Unknown command: {other}");
            eprintln!();
            print_usage();
            1
        }
    };
    std::process::exit(code);
}

fn print_usage() {
    println!(
        r#"rail-score-cli: RAIL Score API command-line tool

USAGE:
    rail-score-cli <COMMAND> [OPTIONS]

COMMANDS:
    health                                   Show service health
    version                                  Show service version
    calculate <text> [--domain D] [--explain]
                                             Score a piece of content
    generate <prompt> [--length short|medium|long]
                                             Generate content and score it
    methods                                  List client operations and endpoints
    smoke                                    Run the live smoke-test suite
    help                                     Show this help message

ENVIRONMENT:
    RAIL_API_KEY                             API key (required)
    RAIL_BASE_URL                            API endpoint (default: https://api.responsibleailabs.ai)
    RAIL_TIMEOUT_SECS                        Request timeout in seconds (default: 30)
    RUST_LOG                                 Log filter (e.g. rail_score_sdk=debug)"#
    );
}

fn with_client(
    config: rail_score_sdk::Result<ClientConfig>,
    run: impl FnOnce(&RailScoreClient) -> i32,
) -> i32 {
    let client = match config.and_then(RailScoreClient::with_config) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Error: {e}");
            return 1;
        }
    };
    println!("Configuration:");
    println!("  API Key:  {}", client.config().api_key_preview());
    println!("  Base URL: {}", client.config().base_url());
    println!("  Timeout:  {:?}", client.config().timeout());
    println!();
    run(&client)
}

fn flag_value<'a>(args: &'a [String], name: &str) -> Option<&'a str> {
    args.iter()
        .position(|a| a == name)
        .and_then(|i| args.get(i + 1))
        .map(String::as_str)
}

fn positional(args: &[String]) -> Option<&str> {
    args.first().filter(|a| !a.starts_with("--")).map(String::as_str)
}

fn cmd_health(client: &RailScoreClient) -> i32 {
    match client.health() {
        Ok(status) => {
            println!("Health Status: {}", status.status().unwrap_or("N/A"));
            0
        }
        Err(e) => {
            eprintln!("Health check failed: {e}");
            1
        }
    }
}

fn cmd_version(client: &RailScoreClient) -> i32 {
    match client.version() {
        Ok(info) => {
            println!("API Version: {}", info.version().unwrap_or("N/A"));
            0
        }
        Err(e) => {
            eprintln!("Version check failed: {e}");
            1
        }
    }
}

fn cmd_calculate(client: &RailScoreClient, args: &[String]) -> i32 {
    let Some(text) = positional(args) else {
        eprintln!("Error: calculate requires <text>");
        return 1;
    };
    let mut request = CalculateRequest::new(text).explain_scores(args.iter().any(|a| a == "--explain"));
    if let Some(domain) = flag_value(args, "--domain") {
        match domain.parse::<Domain>() {
            Ok(d) => request = request.domain(d),
            Err(e) => {
                eprintln!("Error: {e}");
                return 1;
            }
        }
    }
    match run_calculate(client, &request) {
        Ok(()) => 0,
        Err(e) => {
            eprintln!("Calculate failed: {e}");
            1
        }
    }
}

fn run_calculate(client: &RailScoreClient, request: &CalculateRequest) -> rail_score_sdk::Result<()> {
    let result = client.calculate(request)?;
    println!("RAIL Score: {}/10", result.rail_score);
    println!("Grade: {}", result.grade);
    let metadata = result.evaluation_metadata.clone().unwrap_or_default();
    println!("Model Used: {}", metadata.model_used.as_deref().unwrap_or("N/A"));
    if let Some(ms) = metadata.evaluation_time_ms {
        println!("Evaluation Time: {ms}ms");
    }
    println!("Cached: {}", metadata.is_cached());

    println!("\nDimension Scores:");
    for (dimension, details) in result.dimension_scores().iter() {
        println!("   {}: {}/10 ({})", dimension, details.score, details.grade);
    }

    let analysis = result.overall_analysis.clone().unwrap_or_default();
    println!("\nOverall Analysis:");
    println!("   Strengths: {} items", analysis.strengths().len());
    if let Some(first) = analysis.strengths().first() {
        println!("      - {first}");
    }
    println!("   Weaknesses: {} items", analysis.weaknesses().len());
    if let Some(first) = analysis.weaknesses().first() {
        println!("      - {first}");
    }
    println!(
        "   Top Priority: {}",
        analysis.top_priority.as_deref().unwrap_or("N/A")
    );
    Ok(())
}

fn cmd_generate(client: &RailScoreClient, args: &[String]) -> i32 {
    let Some(prompt) = positional(args) else {
        eprintln!("Error: generate requires <prompt>");
        return 1;
    };
    let mut request = GenerateRequest::new(prompt);
    if let Some(length) = flag_value(args, "--length") {
        match length.parse::<ContentLength>() {
            Ok(l) => request = request.length(l),
            Err(e) => {
                eprintln!("Error: {e}");
                return 1;
            }
        }
    }
    match run_generate(client, &request) {
        Ok(()) => 0,
        Err(e) => {
            eprintln!("Generate failed: {e}");
            1
        }
    }
}

fn run_generate(client: &RailScoreClient, request: &GenerateRequest) -> rail_score_sdk::Result<()> {
    let result = client.generate(request)?;
    let preview: String = result.content.chars().take(100).collect();
    println!("Content length: {} characters", result.content.chars().count());
    println!("Content preview: {preview}...");
    println!("RAIL Score: {}/10", result.rail_scores.rail_score);
    let metadata = result.generation_metadata.unwrap_or_default();
    println!("Model: {}", metadata.model.as_deref().unwrap_or("N/A"));
    println!("Attempts: {}", metadata.attempts.unwrap_or(0));
    if let Some(ms) = metadata.generation_time_ms {
        println!("Generation Time: {ms}ms");
    }
    println!("Requirements Met: {}", result.rail_scores.requirements_met());
    Ok(())
}

fn cmd_methods() -> i32 {
    for endpoint in Endpoint::ALL {
        println!(
            "  {:<18} {:<5} {}",
            format!("{}()", endpoint.operation()),
            endpoint.method().as_str(),
            endpoint.path()
        );
    }
    0
}

fn section(title: &str) {
    println!("\n{}", "=".repeat(70));
    println!("  {title}");
    println!("{}", "=".repeat(70));
}

fn cmd_smoke(client: &RailScoreClient) -> i32 {
    let mut results: Vec<(&str, bool)> = Vec::new();

    section("Health Check");
    results.push(("health", cmd_health(client) == 0));

    section("Version Endpoint");
    results.push(("version", cmd_version(client) == 0));

    section("Calculate RAIL Score");
    let request = CalculateRequest::new(
        "AI should prioritize human welfare, be transparent, and ensure fairness for all stakeholders.",
    )
    .domain(Domain::General)
    .explain_scores(true);
    results.push(("calculate", report(run_calculate(client, &request))));

    section("Custom Weights");
    let request = CalculateRequest::new("AI systems must prioritize fairness and safety above all else.")
        .domain(Domain::General)
        .weight(Dimension::Fairness, 0.25)
        .weight(Dimension::Safety, 0.25)
        .weight(Dimension::Reliability, 0.15)
        .weight(Dimension::Transparency, 0.15)
        .weight(Dimension::Privacy, 0.05)
        .weight(Dimension::Accountability, 0.05)
        .weight(Dimension::Inclusivity, 0.05)
        .weight(Dimension::UserImpact, 0.05);
    let weighted = client.calculate(&request).map(|r| {
        println!("RAIL Score: {}/10", r.rail_score);
        println!("Grade: {}", r.grade);
    });
    results.push(("custom_weights", report(weighted)));

    section("Content Generation");
    let request = GenerateRequest::new("Write a short paragraph about responsible AI in healthcare")
        .length(ContentLength::Short)
        .context(
            GenerationContext::new()
                .purpose("blog_post")
                .industry("healthcare")
                .tone("professional"),
        )
        .rail_requirements(
            RailRequirements::new()
                .minimum(Dimension::Safety, 7.0)
                .minimum(Dimension::Reliability, 7.0),
        );
    results.push(("generate", report(run_generate(client, &request))));

    section("Error Handling");
    let validation_ok = match client.calculate(&CalculateRequest::new("Short")) {
        Err(Error::Validation { message, .. }) => {
            println!("Validation error caught correctly: {message}");
            true
        }
        Err(e) => {
            println!("Unexpected error kind ({}): {e}", e.kind());
            false
        }
        Ok(_) => {
            println!("Should have failed with a validation error");
            false
        }
    };
    results.push(("error_handling", validation_ok));

    section("Test Summary");
    let passed = results.iter().filter(|(_, ok)| *ok).count();
    for (name, ok) in &results {
        println!("  {}  {name}", if *ok { "PASS" } else { "FAIL" });
    }
    println!("\n  Total: {} tests", results.len());
    println!("  Passed: {passed} tests");
    println!("  Failed: {} tests", results.len() - passed);

    if passed == results.len() {
        0
    } else {
        1
    }
}

fn report(outcome: rail_score_sdk::Result<()>) -> bool {
    match outcome {
        Ok(()) => true,
        Err(e) => {
            eprintln!("Failed: {e}");
            false
        }
    }
}

/// Smoke runs use [`SMOKE_TIMEOUT`] unless the timeout was set explicitly.
fn smoke_config(config: ClientConfig, timeout_from_env: bool) -> rail_score_sdk::Result<ClientConfig> {
    if timeout_from_env {
        return Ok(config);
    }
    ClientConfig::builder()
        .api_key(config.api_key())
        .base_url(config.base_url())
        .user_agent(config.user_agent())
        .timeout(SMOKE_TIMEOUT)
        .build()
}
