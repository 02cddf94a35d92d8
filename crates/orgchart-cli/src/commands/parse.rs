//! Line grammar for the command loop
//!
//! ```text
//! employee::add <id> <role> [dept] [reportsTo]
//! employee::get <id>
//! employee::list <role>
//! employee::reportees <id>
//! employee::chain <id>
//! exit
//! ```
//!
//! For `employee::add`, two optional tokens are department then superior.
//! A lone optional token starting with `E` is read as the superior id,
//! otherwise as the department.

use thiserror::Error;

/// Prefix that marks an id token in the optional add position
const SUPERIOR_ID_PREFIX: char = 'E';

/// A parsed input line
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Instruction {
    Blank,
    Exit,
    Add {
        id: String,
        role: String,
        department: Option<String>,
        superior_id: Option<String>,
    },
    Get { id: String },
    List { role: String },
    Reportees { id: String },
    Chain { id: String },
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("Invalid command format")]
    InvalidFormat,

    #[error("Unsupported command.")]
    Unsupported,
}

/// Parse one line of input
pub fn parse_line(line: &str) -> Result<Instruction, ParseError> {
    let trimmed = line.trim();
    if trimmed.is_empty() {
        return Ok(Instruction::Blank);
    }
    if trimmed.eq_ignore_ascii_case("exit") {
        return Ok(Instruction::Exit);
    }

    let tokens: Vec<&str> = trimmed.split_whitespace().collect();
    match tokens[0] {
        "employee::add" => parse_add(&tokens),
        "employee::get" => single_arg(&tokens).map(|id| Instruction::Get { id }),
        "employee::list" => single_arg(&tokens).map(|role| Instruction::List { role }),
        "employee::reportees" => single_arg(&tokens).map(|id| Instruction::Reportees { id }),
        "employee::chain" => single_arg(&tokens).map(|id| Instruction::Chain { id }),
        _ => Err(ParseError::Unsupported),
    }
}

fn parse_add(tokens: &[&str]) -> Result<Instruction, ParseError> {
    if tokens.len() < 3 {
        return Err(ParseError::InvalidFormat);
    }

    let third = tokens.get(3).copied();
    let fourth = tokens.get(4).copied();

    let (department, superior_id) = match (third, fourth) {
        (None, _) => (None, None),
        (Some(dept), Some(superior)) => (Some(dept), Some(superior)),
        (Some(t), None) if t.starts_with(SUPERIOR_ID_PREFIX) => (None, Some(t)),
        (Some(dept), None) => (Some(dept), None),
    };

    Ok(Instruction::Add {
        id: tokens[1].to_string(),
        role: tokens[2].to_string(),
        department: department.map(str::to_string),
        superior_id: superior_id.map(str::to_string),
    })
}

fn single_arg(tokens: &[&str]) -> Result<String, ParseError> {
    match tokens {
        [_, arg] => Ok((*arg).to_string()),
        _ => Err(ParseError::InvalidFormat),
    }
}
