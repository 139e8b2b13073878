use anyhow::{Context, Result};
use pico_args::Arguments;
use promptline::*;
use std::env;
use std::path::PathBuf;

#[derive(Debug)]
struct Args {
    shell: String,
    theme: Option<String>,
    config: Option<PathBuf>,
    error: i32,
    basename: bool,
    help: bool,
}

impl Args {
    fn from_env() -> Result<Self> {
        let mut args = Arguments::from_env();

        Ok(Self {
            shell: args
                .opt_value_from_str("--shell")
                .unwrap_or(None)
                .or_else(|| env::var("PROMPTLINE_SHELL").ok())
                .unwrap_or_else(|| "bash".to_string()),
            theme: args
                .opt_value_from_str("--theme")
                .unwrap_or(None)
                .or_else(|| env::var("PROMPTLINE_THEME").ok()),
            config: args
                .opt_value_from_str::<_, PathBuf>("--config")
                .unwrap_or(None)
                .or_else(|| env::var("PROMPTLINE_CONFIG").ok().map(PathBuf::from)),
            error: args.opt_value_from_str("--error").unwrap_or(None).unwrap_or(0),
            basename: args.contains("--basename"),
            help: args.contains("--help"),
        })
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::from_env()?;

    if args.help {
        print_help();
        return Ok(());
    }

    let mut config = config::load_config(args.config.clone()).await?;
    if let Some(theme) = args.theme {
        config.theme = theme;
    }

    let ctx = RenderContext {
        theme: themes::get_theme(&config.theme),
        env: EnvSnapshot::current(),
        cwd: env::current_dir().context("Failed to get current directory")?,
        exit_code: args.error,
        basename_only: args.basename,
    };

    let prompt = generate_prompt(&config, Shell::from_name(&args.shell), ctx).await?;
    print!("{}", prompt);

    Ok(())
}

fn print_help() {
    println!("Promptline - Powerline-style shell prompt renderer");
    println!();
    println!("USAGE:");
    println!("    promptline [OPTIONS]");
    println!();
    println!("OPTIONS:");
    println!("    --shell <SHELL>        Shell escaping: bash, zsh, bare [default: bash]");
    println!("    --theme <THEME>        Theme: default, solarized-dark, gruvbox [default: default]");
    println!("    --config <FILE>        Custom config file path");
    println!("    --error <CODE>         Exit status of the previous command [default: 0]");
    println!("    --basename             Show only the directory name instead of the full path");
    println!("    --help                 Show this help message");
    println!();
    println!("ENVIRONMENT VARIABLES:");
    println!("    PROMPTLINE_SHELL       Override shell");
    println!("    PROMPTLINE_THEME       Override theme");
    println!("    PROMPTLINE_CONFIG      Override config path");
    println!("    PROMPTLINE_DEBUG       Enable debug logging");
}
