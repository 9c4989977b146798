mod page;
mod resume;
