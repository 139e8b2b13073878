use promptline::config::*;
use promptline::powerline::{Shell, SEPARATOR};
use promptline::segments::RenderContext;
use promptline::themes;
use promptline::utils::EnvSnapshot;
use promptline::generate_prompt;
use serde_json::json;

fn ctx() -> RenderContext {
    RenderContext {
        theme: themes::get_theme("default"),
        env: EnvSnapshot::default(),
        cwd: std::env::current_dir().unwrap(),
        exit_code: 0,
        basename_only: false,
    }
}

fn cmd_def(command: serde_json::Value) -> SegmentDef {
    SegmentDef::Cmd(CmdConfig {
        command: Some(command),
        colors: ColorOverride::default(),
    })
}

#[tokio::test]
async fn test_prompt_renders_segments_in_configured_order() {
    // The first command is deliberately slower; output order must still
    // follow configuration order.
    let config = Config {
        theme: "default".to_string(),
        segments: vec![
            cmd_def(json!("sh -c 'sleep 0.3; echo slow'")),
            cmd_def(json!("echo fast")),
        ],
    };

    let prompt = generate_prompt(&config, Shell::Bare, ctx()).await.unwrap();
    let slow = prompt.find(" slow ").expect("slow segment missing");
    let fast = prompt.find(" fast ").expect("fast segment missing");
    assert!(slow < fast);
}

#[tokio::test]
async fn test_failing_segment_is_elided_entirely() {
    let config = Config {
        theme: "default".to_string(),
        segments: vec![cmd_def(json!("false")), cmd_def(json!("echo ok"))],
    };

    let prompt = generate_prompt(&config, Shell::Bare, ctx()).await.unwrap();
    assert!(prompt.contains(" ok "));
    // Only one chunk made it in, so exactly one separator was drawn.
    assert_eq!(prompt.matches(SEPARATOR).count(), 1);
}

#[tokio::test]
async fn test_unconfigured_command_produces_no_chunk() {
    let config = Config {
        theme: "default".to_string(),
        segments: vec![SegmentDef::Cmd(CmdConfig::default())],
    };

    let prompt = generate_prompt(&config, Shell::Bare, ctx()).await.unwrap();
    assert_eq!(prompt, "");
}

#[tokio::test]
async fn test_prompt_with_exit_code_and_command() {
    let mut ctx = ctx();
    ctx.exit_code = 127;

    let config = Config {
        theme: "default".to_string(),
        segments: vec![
            cmd_def(json!("echo hello")),
            SegmentDef::ExitCode(ExitCodeConfig::default()),
        ],
    };

    let prompt = generate_prompt(&config, Shell::Bare, ctx).await.unwrap();
    let hello = prompt.find(" hello ").expect("cmd segment missing");
    let code = prompt.find(" 127 ").expect("exit code segment missing");
    assert!(hello < code);
    assert_eq!(prompt.matches(SEPARATOR).count(), 2);
}

#[tokio::test]
async fn test_default_config_produces_a_prompt() {
    let config = Config::default();
    let prompt = generate_prompt(&config, Shell::Bash, ctx()).await.unwrap();

    // cwd always renders; exit_code is silent at zero; git depends on the
    // checkout the tests run in.
    assert!(!prompt.is_empty());
    assert!(prompt.contains("\\["));
}
