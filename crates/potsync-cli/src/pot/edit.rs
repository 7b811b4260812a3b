//! Line-oriented edits used by the template repair step.
//!
//! Both operations are independent passes: each one reads the file fresh,
//! applies a single edit addressed by 1-based line numbers, and writes the
//! file back in place. Repair computes both addresses from the same checker
//! diagnostic, so the second pass is addressed against the file as it exists
//! after the first deletion.

use fs_err as fs;
use std::io;
use std::path::Path;

/// Deletes line `start` through the first blank line strictly after it,
/// inclusive. When no blank line follows, deletes through the end of the
/// file. Out-of-range `start` leaves the file unchanged.
///
/// In the template format an entry is a contiguous block of non-blank lines
/// terminated by a blank separator, so this removes one whole entry.
pub fn delete_through_blank(path: &Path, start: usize) -> io::Result<()> {
    let content = fs::read_to_string(path)?;
    let mut lines: Vec<&str> = content.lines().collect();

    if start == 0 || start > lines.len() {
        return Ok(());
    }
    let start_idx = start - 1;

    let end_idx = lines
        .iter()
        .enumerate()
        .skip(start_idx + 1)
        .find(|(_, line)| line.is_empty())
        .map(|(idx, _)| idx)
        .unwrap_or(lines.len() - 1);

    lines.drain(start_idx..=end_idx);

    write_lines(path, &lines)
}

/// Moves line `from` to immediately after line `to` (`to == 0` moves it to
/// the top of the file). Out-of-range addresses leave the file unchanged.
pub fn move_line(path: &Path, from: usize, to: usize) -> io::Result<()> {
    let content = fs::read_to_string(path)?;
    let mut lines: Vec<&str> = content.lines().collect();

    if from == 0 || from > lines.len() || to > lines.len() {
        return Ok(());
    }

    let line = lines.remove(from - 1);
    let insert_idx = if to < from { to } else { to - 1 };
    lines.insert(insert_idx, line);

    write_lines(path, &lines)
}

fn write_lines(path: &Path, lines: &[&str]) -> io::Result<()> {
    let mut content = lines.join("\n");
    if !content.is_empty() {
        content.push('\n');
    }
    fs::write(path, content)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;
    use tempfile::TempDir;

    fn write_file(dir: &TempDir, content: &str) -> PathBuf {
        let path = dir.path().join("messages.pot");
        std::fs::write(&path, content).unwrap();
        path
    }

    fn read(path: &Path) -> String {
        std::fs::read_to_string(path).unwrap()
    }

    #[test]
    fn test_delete_through_blank_removes_block() {
        let tmp = TempDir::new().unwrap();
        let path = write_file(&tmp, "a\nb\nc\n\nd\n");

        delete_through_blank(&path, 2).unwrap();

        assert_eq!(read(&path), "a\nd\n");
    }

    #[test]
    fn test_delete_through_blank_no_blank_deletes_to_eof() {
        let tmp = TempDir::new().unwrap();
        let path = write_file(&tmp, "a\nb\nc\n");

        delete_through_blank(&path, 2).unwrap();

        assert_eq!(read(&path), "a\n");
    }

    #[test]
    fn test_delete_through_blank_start_on_blank_line() {
        // The end of the range is the next blank line after the start, even
        // when the start line itself is blank.
        let tmp = TempDir::new().unwrap();
        let path = write_file(&tmp, "a\n\nb\n\nc\n");

        delete_through_blank(&path, 2).unwrap();

        assert_eq!(read(&path), "a\nc\n");
    }

    #[test]
    fn test_delete_through_blank_out_of_range_is_noop() {
        let tmp = TempDir::new().unwrap();
        let path = write_file(&tmp, "a\nb\n");

        delete_through_blank(&path, 10).unwrap();

        assert_eq!(read(&path), "a\nb\n");
    }

    #[test]
    fn test_move_line_backward() {
        let tmp = TempDir::new().unwrap();
        let path = write_file(&tmp, "a\nb\nc\nd\n");

        // Move line 4 to after line 1.
        move_line(&path, 4, 1).unwrap();

        assert_eq!(read(&path), "a\nd\nb\nc\n");
    }

    #[test]
    fn test_move_line_to_top() {
        let tmp = TempDir::new().unwrap();
        let path = write_file(&tmp, "a\nb\nc\n");

        move_line(&path, 3, 0).unwrap();

        assert_eq!(read(&path), "c\na\nb\n");
    }

    #[test]
    fn test_move_line_forward() {
        let tmp = TempDir::new().unwrap();
        let path = write_file(&tmp, "a\nb\nc\nd\n");

        // Move line 1 to after line 3.
        move_line(&path, 1, 3).unwrap();

        assert_eq!(read(&path), "b\nc\na\nd\n");
    }

    #[test]
    fn test_move_line_out_of_range_is_noop() {
        let tmp = TempDir::new().unwrap();
        let path = write_file(&tmp, "a\nb\n");

        move_line(&path, 5, 0).unwrap();
        move_line(&path, 1, 9).unwrap();

        assert_eq!(read(&path), "a\nb\n");
    }
}
