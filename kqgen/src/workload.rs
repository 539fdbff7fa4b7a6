use crate::command::Command;
use crate::error::WorkloadError;
use crate::parse::parse_workload;

use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::Path;
use std::str::FromStr;
use tracing::debug;

/// An ordered sequence of commands, as written to or read from a workload file.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Workload {
    commands: Vec<Command>,
}

impl Workload {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    pub fn insert_count(&self) -> usize {
        self.commands.iter().filter(|c| c.is_insert()).count()
    }

    pub fn query_count(&self) -> usize {
        self.commands.iter().filter(|c| c.is_query()).count()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Command> {
        self.commands.iter()
    }

    pub fn into_commands(self) -> Vec<Command> {
        self.commands
    }

    /// Writes every command as its token group followed by a single space. The output therefore
    /// ends in a trailing space and carries no newline; an empty workload writes nothing.
    pub fn write_to<W: Write>(&self, writer: &mut W) -> Result<(), WorkloadError> {
        for command in &self.commands {
            write!(writer, "{command} ")?;
        }
        Ok(())
    }

    /// Serializes the workload to `path`, truncating anything already there.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), WorkloadError> {
        let path = path.as_ref();
        let mut writer = BufWriter::new(File::create(path)?);
        self.write_to(&mut writer)?;
        writer.flush()?;
        debug!("{} commands written to {}.", self.len(), path.display());
        Ok(())
    }

    /// Reads and parses a workload file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, WorkloadError> {
        let text = fs::read_to_string(path)?;
        Ok(text.parse::<Workload>()?)
    }
}

impl From<Vec<Command>> for Workload {
    fn from(commands: Vec<Command>) -> Self {
        Self { commands }
    }
}

impl<'a> IntoIterator for &'a Workload {
    type Item = &'a Command;
    type IntoIter = std::slice::Iter<'a, Command>;

    fn into_iter(self) -> Self::IntoIter {
        self.commands.iter()
    }
}

impl FromStr for Workload {
    type Err = crate::error::ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_workload(s).map(Workload::from)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generator::WorkloadGenerator;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn serialize(workload: &Workload) -> String {
        let mut buf = Vec::new();
        workload.write_to(&mut buf).unwrap();
        String::from_utf8(buf).unwrap()
    }

    fn is_int(token: &str) -> bool {
        let digits = token.strip_prefix('-').unwrap_or(token);
        !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit())
    }

    #[test]
    fn test_token_layout() {
        let workload = Workload::from(vec![
            Command::Insert(5),
            Command::Query { low: -3, high: 12 },
            Command::Insert(-100),
        ]);
        assert_eq!(serialize(&workload), "k 5 q -3 12 k -100 ");
    }

    #[test]
    fn test_single_insert_layout() {
        let mut rng = StdRng::seed_from_u64(1);
        let workload = WorkloadGenerator::default().generate(1, 0, &mut rng);
        let text = serialize(&workload);

        let body = text.strip_suffix(' ').expect("trailing space");
        let tokens: Vec<&str> = body.split(' ').collect();
        assert_eq!(tokens.len(), 2);
        assert_eq!(tokens[0], "k");
        assert!(is_int(tokens[1]));
    }

    #[test]
    fn test_single_query_layout() {
        let mut rng = StdRng::seed_from_u64(2);
        let workload = WorkloadGenerator::default().generate(0, 1, &mut rng);
        let text = serialize(&workload);

        let body = text.strip_suffix(' ').expect("trailing space");
        let tokens: Vec<&str> = body.split(' ').collect();
        assert_eq!(tokens.len(), 3);
        assert_eq!(tokens[0], "q");
        assert!(is_int(tokens[1]) && is_int(tokens[2]));
        let low: i32 = tokens[1].parse().unwrap();
        let high: i32 = tokens[2].parse().unwrap();
        assert!(low < high);
    }

    #[test]
    fn test_save_empty_writes_zero_bytes() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("empty.dat");
        Workload::new().save(&path).unwrap();
        assert_eq!(fs::metadata(&path).unwrap().len(), 0);
    }

    #[test]
    fn test_save_truncates_existing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("rand.dat");
        fs::write(&path, "stale contents that are longer than the workload").unwrap();

        Workload::from(vec![Command::Insert(1)]).save(&path).unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "k 1 ");
    }

    #[test]
    fn test_save_then_load_keeps_commands() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("rand.dat");
        let mut rng = StdRng::seed_from_u64(3);
        let workload = WorkloadGenerator::default().generate(300, 200, &mut rng);

        workload.save(&path).unwrap();
        let loaded = Workload::load(&path).unwrap();

        let mut expected = workload.into_commands();
        let mut actual = loaded.into_commands();
        expected.sort();
        actual.sort();
        assert_eq!(actual, expected);
    }

    #[test]
    fn test_save_into_missing_directory_fails() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("no_such_dir").join("rand.dat");
        let err = Workload::new().save(&path).unwrap_err();
        assert!(matches!(err, WorkloadError::Io(_)));
    }
}
