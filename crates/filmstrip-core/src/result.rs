use crate::error::FilmstripError;

pub type FilmstripResult<T> = Result<T, FilmstripError>;
