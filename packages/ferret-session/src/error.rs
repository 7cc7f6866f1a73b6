pub type Result<T, E = Error> = std::result::Result<T, E>;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
	#[error("Selection {input} is out of range; {visible} item(s) are shown.")]
	OutOfRangeSelection { input: String, visible: usize },
	#[error("The session has already terminated.")]
	Terminated,
}
