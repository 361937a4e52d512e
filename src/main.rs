// SPDX-License-Identifier: MIT
//
// contrast-check — CLI adapter over the contrast-core pipeline.
//
// The binary owns everything the pure core refuses to: argument
// parsing, two-decimal display rounding, badge rendering, and exit
// codes. Scriptable in CI:
//
//   contrast-check '#777777' '#ffffff'             → exit 1 (fails AA normal)
//   contrast-check '#777777' '#ffffff' --large     → exit 0 (passes AA large)
//   contrast-check '#777777' '#ffffff' --level aaa → exit 1
//   contrast-check 'mauve' '#ffffff'               → exit 2 (not a hex color)

use std::process::ExitCode;

use clap::{Parser, ValueEnum};
use contrast_core::{Evaluation, Level, evaluate_hex};

#[derive(Parser)]
#[command(name = "contrast-check")]
#[command(about = "Check a text/background color pair against WCAG 2.1 contrast thresholds")]
struct Cli {
    /// Foreground (text) color, strict #RRGGBB form.
    foreground: String,

    /// Background color, strict #RRGGBB form.
    background: String,

    /// Judge the exit code as large text (>= 18pt, or >= 14pt bold).
    #[arg(long, default_value_t = false)]
    large: bool,

    /// Conformance level the exit code is judged against.
    #[arg(long, value_enum, default_value_t = LevelArg::Aa)]
    level: LevelArg,
}

#[derive(Clone, Copy, ValueEnum)]
enum LevelArg {
    Aa,
    Aaa,
}

impl From<LevelArg> for Level {
    fn from(arg: LevelArg) -> Self {
        match arg {
            LevelArg::Aa => Self::Aa,
            LevelArg::Aaa => Self::Aaa,
        }
    }
}

/// Render the full four-verdict report, ratio rounded to two decimals.
fn render_report(eval: &Evaluation) -> String {
    let c = eval.conformance;
    let badge = |pass: bool| if pass { "pass" } else { "fail" };
    format!(
        "{fg} on {bg} — contrast ratio {ratio:.2}\n\
         \n  AA  normal   {aan}   (needs 4.5)\
         \n  AA  large    {aal}   (needs 3.0)\
         \n  AAA normal   {aaan}   (needs 7.0)\
         \n  AAA large    {aaal}   (needs 4.5)",
        fg = eval.fg,
        bg = eval.bg,
        ratio = eval.ratio,
        aan = badge(c.aa_normal),
        aal = badge(c.aa_large),
        aaan = badge(c.aaa_normal),
        aaal = badge(c.aaa_large),
    )
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let eval = match evaluate_hex(&cli.foreground, &cli.background) {
        Ok(eval) => eval,
        Err(err) => {
            eprintln!("contrast-check: {err}");
            return ExitCode::from(2);
        }
    };

    println!("{}", render_report(&eval));

    if eval.conformance.passes(cli.level.into(), cli.large) {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
