use std::fmt::Display;

const INDENT_WIDTH: usize = 2;

/// Prints nested bullet point lists, e.g. the run summary and the journal preview.
/// `indent()` returns a printer for the next nesting level that writes to the same output.
pub struct BulletPointPrinter<W: LineWriter + Clone> {
    writer: W,
    depth: usize,
}

impl<W: LineWriter + Clone> BulletPointPrinter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer, depth: 0 }
    }

    pub fn print_item(&self, item: impl Display) {
        let indent = self.depth * INDENT_WIDTH;
        self.writer.write_line(&format!("{:indent$}• {item}", ""));
    }

    pub fn indent(&self) -> Self {
        Self {
            writer: self.writer.clone(),
            depth: self.depth + 1,
        }
    }

    /// Prints `title` with `items` nested below it. Prints nothing if there are no items.
    pub fn print_list<T: Display>(&self, title: impl Display, items: impl IntoIterator<Item = T>) {
        let mut items = items.into_iter().peekable();
        if items.peek().is_none() {
            return;
        }
        self.print_item(title);
        let nested = self.indent();
        for item in items {
            nested.print_item(item);
        }
    }
}

impl BulletPointPrinter<StdoutLineWriter> {
    pub fn new_stdout() -> Self {
        Self::new(StdoutLineWriter)
    }
}

pub trait LineWriter {
    fn write_line(&self, line: &str);
}

#[derive(Clone, Copy)]
pub struct StdoutLineWriter;

impl LineWriter for StdoutLineWriter {
    fn write_line(&self, line: &str) {
        println!("{line}");
    }
}
