pub const DEFAULT_RECORD_FILE: &str = "students.txt";

// --- Interactive shell text ---

pub const SHELL_BANNER: &str = "STUDENT RECORDS";

pub const SHELL_MENU: &str = "\
1. Add record
2. Display all records
3. Find record by roll number
4. Delete record by roll number
5. Save records to file
6. Exit";
