//! Character classes and alphabet building.

pub const LOWERCASE: &str = "abcdefghijklmnopqrstuvwxyz";
pub const UPPERCASE: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ";
pub const DIGITS: &str = "0123456789";
pub const SYMBOLS: &str = "!@#$%^&*()_+[]{}|;:,.<>?";

/// One of the four selectable character classes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CharClass {
    Lowercase,
    Uppercase,
    Numbers,
    Symbols,
}

impl CharClass {
    /// All classes, in alphabet order.
    pub const ALL: [CharClass; 4] = [
        CharClass::Lowercase,
        CharClass::Uppercase,
        CharClass::Numbers,
        CharClass::Symbols,
    ];

    pub fn chars(self) -> &'static str {
        match self {
            CharClass::Lowercase => LOWERCASE,
            CharClass::Uppercase => UPPERCASE,
            CharClass::Numbers => DIGITS,
            CharClass::Symbols => SYMBOLS,
        }
    }

    /// Checkbox label shown in the form.
    pub fn label(self) -> &'static str {
        match self {
            CharClass::Lowercase => "Include Lowercase",
            CharClass::Uppercase => "Include Uppercase",
            CharClass::Numbers => "Include Numbers",
            CharClass::Symbols => "Include Symbols",
        }
    }
}

/// Which character classes are switched on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ClassFlags {
    pub lowercase: bool,
    pub uppercase: bool,
    pub numbers: bool,
    pub symbols: bool,
}

impl ClassFlags {
    pub const NONE: ClassFlags = ClassFlags {
        lowercase: false,
        uppercase: false,
        numbers: false,
        symbols: false,
    };

    #[cfg(test)]
    pub const ALL: ClassFlags = ClassFlags {
        lowercase: true,
        uppercase: true,
        numbers: true,
        symbols: true,
    };

    pub fn get(&self, class: CharClass) -> bool {
        match class {
            CharClass::Lowercase => self.lowercase,
            CharClass::Uppercase => self.uppercase,
            CharClass::Numbers => self.numbers,
            CharClass::Symbols => self.symbols,
        }
    }

    /// Copy of these flags with `class` flipped.
    #[must_use]
    pub fn toggled(mut self, class: CharClass) -> Self {
        let flag = match class {
            CharClass::Lowercase => &mut self.lowercase,
            CharClass::Uppercase => &mut self.uppercase,
            CharClass::Numbers => &mut self.numbers,
            CharClass::Symbols => &mut self.symbols,
        };
        *flag = !*flag;
        self
    }

    pub fn any(&self) -> bool {
        self.lowercase || self.uppercase || self.numbers || self.symbols
    }
}

impl Default for ClassFlags {
    fn default() -> Self {
        Self {
            lowercase: true,
            ..Self::NONE
        }
    }
}

/// Build the alphabet for the selected classes.
///
/// Segments are appended lowercase, uppercase, numbers, symbols. Classes that
/// are switched off contribute nothing, so no flags yields an empty string.
pub fn build(flags: &ClassFlags) -> String {
    let mut chars = String::new();

    for class in CharClass::ALL {
        if flags.get(class) {
            chars.push_str(class.chars());
        }
    }

    chars
}
