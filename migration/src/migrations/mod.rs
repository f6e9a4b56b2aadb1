pub mod m202601120001_create_assignments;
pub mod m202601120002_create_submissions;
