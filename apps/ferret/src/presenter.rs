use std::io::{self, BufRead, Write};

use time::format_description::well_known::Rfc3339;

use ferret_domain::{Item, Tag};
use ferret_session::{Error, FilterSession, SelectionOutcome, VisibleSet};

const PROMPT: &str = "Filter, number to select, empty to clear, 0 to go back: ";

/// How a record kind is listed.
pub trait Row {
	const RECENT_TITLE: &'static str;
	const FILTERED_TITLE: &'static str;
	const NOUN: &'static str;

	fn row(&self) -> String;
}
impl Row for Item {
	const RECENT_TITLE: &'static str = "Recent Items";
	const FILTERED_TITLE: &'static str = "Filtered Items";
	const NOUN: &'static str = "items";

	fn row(&self) -> String {
		if self.tags.is_empty() {
			self.name.clone()
		} else {
			format!("{} [{}]", self.name, self.tags.join(", "))
		}
	}
}
impl Row for Tag {
	const RECENT_TITLE: &'static str = "Tags";
	const FILTERED_TITLE: &'static str = "Filtered Tags";
	const NOUN: &'static str = "tags";

	fn row(&self) -> String {
		match self.item_count {
			1 => format!("{} (1 item)", self.name),
			count => format!("{} ({count} items)", self.name),
		}
	}
}

/// Line-oriented front end for a [`FilterSession`].
pub struct Presenter<R, W> {
	input: R,
	output: W,
}
impl<R, W> Presenter<R, W>
where
	R: BufRead,
	W: Write,
{
	pub fn new(input: R, output: W) -> Self {
		Self { input, output }
	}

	pub fn into_output(self) -> W {
		self.output
	}

	/// Drives `session` until a record is chosen or the operator leaves.
	///
	/// End of input counts as going back.
	pub fn run<T>(&mut self, session: &mut FilterSession<T>) -> io::Result<Option<T>>
	where
		T: Row + Clone,
	{
		self.render(session.visible())?;

		loop {
			write!(self.output, "{PROMPT}")?;
			self.output.flush()?;

			let Some(line) = self.read_line()? else {
				tracing::debug!("Input closed; leaving the session.");

				writeln!(self.output)?;

				return Ok(None);
			};

			match session.step(&line) {
				Ok(SelectionOutcome::Selected(record)) => return Ok(Some(record.value().clone())),
				Ok(SelectionOutcome::GoBack) | Err(Error::Terminated) => return Ok(None),
				Ok(SelectionOutcome::Continue(visible)) => self.render(visible)?,
				Err(Error::OutOfRangeSelection { visible, .. }) => {
					self.report_out_of_range::<T>(visible)?;
				},
			}
		}
	}

	pub fn render<T>(&mut self, visible: VisibleSet<'_, T>) -> io::Result<()>
	where
		T: Row,
	{
		writeln!(self.output)?;

		if visible.is_filtered() {
			writeln!(self.output, "{} (filter: '{}')", T::FILTERED_TITLE, visible.filter())?;
		} else {
			writeln!(self.output, "{}", T::RECENT_TITLE)?;
		}

		if visible.is_empty() {
			writeln!(self.output, "No matching {}.", T::NOUN)?;
		}

		for (index, record) in visible.iter() {
			writeln!(self.output, "{index:>3}. {}", record.value().row())?;
		}

		Ok(())
	}

	pub fn show_item(&mut self, item: &Item) -> io::Result<()> {
		let created =
			item.created_at.format(&Rfc3339).unwrap_or_else(|_| item.created_at.to_string());

		writeln!(self.output)?;
		writeln!(self.output, "Name: {}", item.name)?;

		if let Some(description) = item.description.as_deref() {
			writeln!(self.output, "Description: {description}")?;
		}
		if !item.tags.is_empty() {
			writeln!(self.output, "Tags: {}", item.tags.join(", "))?;
		}
		if let Some(path) = item.path.as_deref() {
			writeln!(self.output, "Path: {}", path.display())?;
		}

		writeln!(self.output, "Created: {created}")?;
		writeln!(self.output, "Id: {}", item.id)
	}

	pub fn message(&mut self, text: &str) -> io::Result<()> {
		writeln!(self.output, "{text}")
	}

	fn report_out_of_range<T>(&mut self, visible: usize) -> io::Result<()>
	where
		T: Row,
	{
		if visible == 0 {
			writeln!(self.output, "Invalid selection: no {} are shown.", T::NOUN)
		} else {
			writeln!(self.output, "Invalid selection: enter a number between 1 and {visible}.")
		}
	}

	/// Next line without its terminator, or `None` at end of input.
	fn read_line(&mut self) -> io::Result<Option<String>> {
		let mut line = String::new();

		if self.input.read_line(&mut line)? == 0 {
			return Ok(None);
		}
		if line.ends_with('\n') {
			line.pop();

			if line.ends_with('\r') {
				line.pop();
			}
		}

		Ok(Some(line))
	}
}
