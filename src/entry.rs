//! A single parsed line of a passwd file.

use std::fmt::{Display, Formatter};
use std::str::FromStr;

use crate::error::{Field, FormatError};

/// One account from the passwd file, with all seven fields.
///
/// The password field is usually a placeholder (`x`, `*`) pointing at the shadow
/// file or another authentication scheme; it is stored verbatim and never
/// interpreted.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct PasswdEntry {
    username: String,
    password: String,
    uid: i64,
    gid: i64,
    info: String,
    homedir: String,
    shell: String,
}

impl PasswdEntry {
    pub fn username(&self) -> &str {
        &self.username
    }

    pub fn password(&self) -> &str {
        &self.password
    }

    pub fn uid(&self) -> i64 {
        self.uid
    }

    /// Primary group id.
    pub fn gid(&self) -> i64 {
        self.gid
    }

    /// The comment/GECOS field, often the user's full name.
    pub fn info(&self) -> &str {
        &self.info
    }

    pub fn homedir(&self) -> &str {
        &self.homedir
    }

    pub fn shell(&self) -> &str {
        &self.shell
    }
}

/// Parse one `username:password:uid:gid:info:homedir:shell` line.
///
/// Every field is trimmed of surrounding whitespace; empty fields are kept as
/// empty strings. Fails if there are not exactly seven fields or if uid/gid are
/// not base-10 integers. Ids are signed, so legacy entries such as
/// `nfsnobody:x:-2:-2:...` load.
pub fn parse_line(line: &str) -> Result<PasswdEntry, FormatError> {
    let fields: Vec<&str> = line.trim().split(':').map(str::trim).collect();
    let [username, password, uid, gid, info, homedir, shell] = fields.as_slice() else {
        return Err(FormatError::FieldCount {
            found: fields.len(),
        });
    };

    Ok(PasswdEntry {
        username: username.to_string(),
        password: password.to_string(),
        uid: parse_id(uid, Field::Uid)?,
        gid: parse_id(gid, Field::Gid)?,
        info: info.to_string(),
        homedir: homedir.to_string(),
        shell: shell.to_string(),
    })
}

fn parse_id(value: &str, field: Field) -> Result<i64, FormatError> {
    value.parse::<i64>().map_err(|_| FormatError::InvalidNumber {
        field,
        value: value.to_string(),
    })
}

impl FromStr for PasswdEntry {
    type Err = FormatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_line(s)
    }
}

/// Renders the entry back into passwd line form.
impl Display for PasswdEntry {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}:{}:{}:{}:{}:{}:{}",
            self.username, self.password, self.uid, self.gid, self.info, self.homedir, self.shell
        )
    }
}
