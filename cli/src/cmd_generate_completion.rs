// SPDX-FileCopyrightText: 2025-2026 Rentcal Developers
//
// SPDX-License-Identifier: Apache-2.0

use std::{error::Error, fs::File, io, path::PathBuf};

use clap::{ArgMatches, Command, ValueEnum, ValueHint, arg, value_parser};
use clap_complete::generate;

use crate::Cli;

#[derive(Debug, Clone)]
pub struct CmdGenerateCompletion {
    pub shell: Shell,
    pub output: Option<PathBuf>,
}

impl CmdGenerateCompletion {
    pub const NAME: &str = "generate-completion";

    pub fn command() -> Command {
        Command::new(Self::NAME)
            .about("Generate shell completion for the specified shell")
            .hide(true)
            .arg(
                arg!(shell: <SHELL> "The shell generator to use")
                    .value_parser(value_parser!(Shell)),
            )
            .arg(
                arg!(-o --output <PATH> "Write the script to a file instead of stdout")
                    .value_parser(value_parser!(PathBuf))
                    .value_hint(ValueHint::FilePath),
            )
    }

    pub fn from(matches: &ArgMatches) -> Self {
        let shell = match matches.get_one::<Shell>("shell") {
            Some(shell) => *shell,
            None => unreachable!("shell is required"),
        };
        Self {
            shell,
            output: matches.get_one("output").cloned(),
        }
    }

    pub fn run(self) -> Result<(), Box<dyn Error>> {
        tracing::debug!(?self, "generating shell completion...");
        match &self.output {
            Some(path) => {
                let mut file = File::create(path)
                    .map_err(|e| format!("Failed to create {}: {}", path.display(), e))?;
                self.generate(&mut file);
            }
            None => self.generate(&mut io::stdout()),
        }
        Ok(())
    }

    pub fn generate(&self, buf: &mut impl io::Write) {
        use clap_complete::Shell as ClapShell;

        let mut cmd = Cli::command();
        let name = cmd.get_name().to_string();
        match self.shell {
            Shell::Bash => generate(ClapShell::Bash, &mut cmd, name, buf),
            Shell::Elvish => generate(ClapShell::Elvish, &mut cmd, name, buf),
            Shell::Fish => generate(ClapShell::Fish, &mut cmd, name, buf),
            Shell::PowerShell => generate(ClapShell::PowerShell, &mut cmd, name, buf),
            Shell::Zsh => generate(ClapShell::Zsh, &mut cmd, name, buf),
            Shell::Nushell => generate(clap_complete_nushell::Nushell {}, &mut cmd, name, buf),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Shell {
    Bash,
    Elvish,
    Fish,
    Nushell,
    #[clap(name = "powershell")]
    #[allow(clippy::enum_variant_names)]
    PowerShell,
    Zsh,
}
