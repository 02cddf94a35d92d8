//! Command loop
//!
//! Reads lines from stdin (with banner and prompt) or from a script file,
//! applies each to one in-memory directory, and prints the hierarchy when
//! input ends or `exit` is typed. Failed commands print an `ERR:` line and
//! the loop carries on.

use std::fs::File;
use std::io::{self, BufRead, BufReader, Write};
use std::path::PathBuf;

use anyhow::Context;
use orgchart_core::ops::directory_ops;
use orgchart_core::traversal::reporting_chain;
use orgchart_core::{
    apply, Command, CommandOutcome, Directory, ExError, OrgError, RoleLimits, StandardPolicy,
};
use orgchart_core_types::{CommandContext, CommandId};

use super::parse::{parse_line, Instruction};
use crate::render;

const BANNER: &str = "=== Employee Management System ===\n\
Use 'employee::add <id> <role> [dept] [reportsTo]'\n\
Type 'exit' to quit.\n";
const PROMPT: &str = "> ";
const FAREWELL: &str = "Exiting Employee Management System...";

pub struct SessionArgs {
    pub limits: RoleLimits,
    pub script: Option<PathBuf>,
    pub json: bool,
}

/// Run a full session against stdout
pub fn execute(args: SessionArgs) -> anyhow::Result<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    let mut session = Session::new(StandardPolicy::new(args.limits));

    match &args.script {
        Some(path) => {
            let file = File::open(path)
                .with_context(|| format!("failed to open script {}", path.display()))?;
            session.run(BufReader::new(file), &mut out, false)?;
        }
        None => {
            let stdin = io::stdin();
            session.run(stdin.lock(), &mut out, true)?;
        }
    }

    session.finish(&mut out, args.json)?;
    Ok(())
}

enum Flow {
    Continue(Vec<String>),
    Exit,
}

/// One directory plus the correlation context of the loop driving it
pub struct Session {
    directory: Directory,
    policy: StandardPolicy,
    ctx: CommandContext,
}

impl Session {
    pub fn new(policy: StandardPolicy) -> Self {
        Self {
            directory: Directory::new(),
            policy,
            ctx: CommandContext::new(),
        }
    }

    /// Process lines until `exit` or end of input
    pub fn run<R: BufRead, W: Write>(
        &mut self,
        mut input: R,
        out: &mut W,
        interactive: bool,
    ) -> io::Result<()> {
        if interactive {
            writeln!(out, "{}", BANNER)?;
        }

        let mut line = String::new();
        loop {
            if interactive {
                write!(out, "{}", PROMPT)?;
                out.flush()?;
            }

            line.clear();
            if input.read_line(&mut line)? == 0 {
                break;
            }

            match self.handle_line(&line) {
                Flow::Continue(lines) => {
                    for l in lines {
                        writeln!(out, "{}", l)?;
                    }
                }
                Flow::Exit => break,
            }
        }

        Ok(())
    }

    /// Print the farewell and the final hierarchy
    pub fn finish<W: Write>(&self, out: &mut W, json: bool) -> anyhow::Result<()> {
        writeln!(out, "{}", FAREWELL)?;
        if json {
            let dump = render::hierarchy_json(&self.directory)
                .context("failed to serialize hierarchy")?;
            writeln!(out, "{}", dump)?;
        } else {
            write!(out, "{}", render::hierarchy_table(&self.directory))?;
        }
        Ok(())
    }

    fn handle_line(&mut self, line: &str) -> Flow {
        let instruction = match parse_line(line) {
            Ok(Instruction::Blank) => return Flow::Continue(Vec::new()),
            Ok(Instruction::Exit) => return Flow::Exit,
            Ok(instruction) => instruction,
            Err(e) => return Flow::Continue(vec![format!("ERR: {}", e)]),
        };

        let command_id = self.ctx.command_id;
        self.ctx.advance();
        let _span = tracing::info_span!(
            "command",
            session_id = %self.ctx.session_id,
            command_id = %command_id
        )
        .entered();

        let lines = match instruction {
            Instruction::Add {
                id,
                role,
                department,
                superior_id,
            } => {
                let cmd = Command::EmployeeAdd {
                    id,
                    role,
                    department,
                    superior_id,
                };
                let op = cmd.op_name();
                apply(&mut self.directory, cmd, &self.policy)
                    .map(|CommandOutcome::Added(view)| vec![render::added_message(&view)])
                    .map_err(|e| self.reject(op, command_id, e))
            }
            Instruction::Get { id } => directory_ops::get_employee(&self.directory, &id)
                .map(|view| vec![render::employee_line(&self.directory, &view)])
                .ok_or(OrgError::EmployeeNotFound { employee_id: id })
                .map_err(|e| self.reject("employee_get", command_id, e)),
            Instruction::List { role } => {
                directory_ops::list_by_role_name(&self.directory, &role)
                    .map(|views| {
                        if views.is_empty() {
                            vec![format!("No employees with role '{}'.", role)]
                        } else {
                            views
                                .iter()
                                .map(|v| render::employee_line(&self.directory, v))
                                .collect()
                        }
                    })
                    .map_err(|e| self.reject("employee_list", command_id, e))
            }
            Instruction::Reportees { id } => directory_ops::reportees_of(&self.directory, &id)
                .map(|views| {
                    if views.is_empty() {
                        vec![format!("Employee '{}' has no reportees.", id)]
                    } else {
                        views
                            .iter()
                            .map(|v| render::employee_line(&self.directory, v))
                            .collect()
                    }
                })
                .map_err(|e| self.reject("employee_reportees", command_id, e)),
            Instruction::Chain { id } => reporting_chain(&self.directory, &id)
                .map(|chain| vec![chain.join(" → ")])
                .map_err(|e| self.reject("employee_chain", command_id, e)),
            Instruction::Blank | Instruction::Exit => Ok(Vec::new()),
        };

        Flow::Continue(lines.unwrap_or_else(|err_line| vec![err_line]))
    }

    /// Log a rejected command and render its `ERR:` line
    fn reject(&self, op: &str, command_id: CommandId, err: OrgError) -> String {
        let line = format!("ERR: {}", err);
        let ex_err = ExError::from(err)
            .with_op(op)
            .with_session_id(self.ctx.session_id.clone())
            .with_command_id(command_id);
        tracing::debug!(err_code = ex_err.code(), "{}", ex_err);
        line
    }
}
