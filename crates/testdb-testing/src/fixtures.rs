//! Setup-script fixtures.

use std::io::Write;
use std::path::Path;

use tempfile::NamedTempFile;

/// A setup script written to a temporary `.sql` file.
///
/// The file lives exactly as long as the fixture value, so keep the
/// fixture alive for the duration of the provisioning call that reads it.
pub struct ScriptFixture {
    file: NamedTempFile,
}

impl ScriptFixture {
    /// Write `content` to a fresh temporary file.
    pub fn new(content: &str) -> std::io::Result<Self> {
        let mut file = NamedTempFile::with_suffix(".sql")?;
        file.write_all(content.as_bytes())?;
        file.flush()?;
        Ok(Self { file })
    }

    /// Path of the script on disk.
    #[must_use]
    pub fn path(&self) -> &Path {
        self.file.path()
    }
}

/// A small membership schema in SQL Server batch style (`GO` separators).
#[must_use]
pub fn membership_script_sqlserver() -> &'static str {
    "USE [$(DatabaseName)]\n\
     GO\n\
     CREATE TABLE MembershipVersionTable (DeploymentId NVARCHAR(150) NOT NULL PRIMARY KEY, Version INT NOT NULL DEFAULT 0)\n\
     GO\n\
     CREATE TABLE MembershipTable (DeploymentId NVARCHAR(150) NOT NULL, Address VARCHAR(45) NOT NULL, Port INT NOT NULL)\n\
     GO\n"
}

/// The same schema in MySQL statement style (semicolon terminators).
#[must_use]
pub fn membership_script_mysql() -> &'static str {
    "USE `$(DatabaseName)`;\n\
     CREATE TABLE MembershipVersionTable (DeploymentId VARCHAR(150) NOT NULL PRIMARY KEY, Version INT NOT NULL DEFAULT 0);\n\
     CREATE TABLE MembershipTable (DeploymentId VARCHAR(150) NOT NULL, Address VARCHAR(45) NOT NULL, Port INT NOT NULL);\n"
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_fixture_round_trips_content() {
        let fixture = ScriptFixture::new("SELECT 1;").unwrap();
        let read_back = std::fs::read_to_string(fixture.path()).unwrap();
        assert_eq!(read_back, "SELECT 1;");
    }

    #[test]
    fn test_canned_scripts_carry_the_name_token() {
        assert!(membership_script_sqlserver().contains("$(DatabaseName)"));
        assert!(membership_script_mysql().contains("$(DatabaseName)"));
    }
}
