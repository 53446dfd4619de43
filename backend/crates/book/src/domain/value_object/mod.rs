pub mod author_name;
pub mod book_id;
pub mod book_title;

pub use author_name::AuthorName;
pub use book_id::BookId;
pub use book_title::BookTitle;
