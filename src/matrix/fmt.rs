use super::Matrix;
use std::fmt;

/// Renders rows as bracketed, comma-separated, fixed-8-decimal text,
/// column-aligned to the widest cell. Multi-row matrices nest their rows in
/// an outer bracket with continuation lines indented one space; empty
/// matrices render as `[]`.
impl fmt::Display for Matrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.data.is_empty() {
            return f.write_str("[]");
        }

        let cells: Vec<String> = self.data.iter().map(|x| format!("{x:.8}")).collect();
        let width = cells.iter().map(String::len).max().unwrap_or(0);

        let mut lines = Vec::with_capacity(self.rows());
        for i in 0..self.rows() {
            let mut line = String::from("[");
            for j in 0..self.cols() {
                let cell = &cells[i * self.cols() + j];
                line.push_str(cell);
                if j != self.cols() - 1 {
                    line.push(',');
                }
                for _ in 0..width - cell.len() {
                    line.push(' ');
                }
            }
            line.push(']');
            lines.push(line);
        }

        if lines.len() == 1 {
            return f.write_str(&lines[0]);
        }

        write!(f, "[{}", lines[0])?;
        for line in &lines[1..] {
            write!(f, "\n {line}")?;
        }
        f.write_str("]")
    }
}
