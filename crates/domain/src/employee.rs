// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

/// A field employee as seen by the scheduling core.
///
/// The employee directory itself (CRUD, CSV import) lives outside the
/// core; this is the projection the processor and notifier consume.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Employee {
    /// The persisted identifier.
    pub employee_id: i64,
    /// The national identifier (RUT).
    pub rut: String,
    /// Given names followed by surnames.
    pub full_name: String,
    /// Contact phone number, if known.
    pub phone: Option<String>,
    /// The roster (role) this employee belongs to.
    pub rol_id: i64,
}

impl Employee {
    /// Creates a new employee projection.
    #[must_use]
    pub const fn new(
        employee_id: i64,
        rut: String,
        full_name: String,
        phone: Option<String>,
        rol_id: i64,
    ) -> Self {
        Self {
            employee_id,
            rut,
            full_name,
            phone,
            rol_id,
        }
    }

    /// First given name plus first surname, for message headers.
    ///
    /// Names follow the local convention of given names first and two
    /// surnames last, so the first surname is the second-to-last word
    /// whenever more than two words are present.
    #[must_use]
    pub fn short_name(&self) -> String {
        let words: Vec<&str> = self.full_name.split_whitespace().collect();
        match words.len() {
            0 => String::new(),
            1 => words[0].to_string(),
            2 => format!("{} {}", words[0], words[1]),
            n => format!("{} {}", words[0], words[n - 2]),
        }
    }
}
