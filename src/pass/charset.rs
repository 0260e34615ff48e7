//! Character classes and pool building for password generation.

const UPPERCASE: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ";
const LOWERCASE: &str = "abcdefghijklmnopqrstuvwxyz";
const DIGITS: &str = "0123456789";
const SYMBOLS: &str = "!@#$%^&*()_+";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CharClass {
    Uppercase,
    Lowercase,
    Digits,
    Symbols,
}

impl CharClass {
    /// Every class, in pool order.
    pub const ALL: [CharClass; 4] = [
        CharClass::Uppercase,
        CharClass::Lowercase,
        CharClass::Digits,
        CharClass::Symbols,
    ];

    pub fn alphabet(self) -> &'static str {
        match self {
            CharClass::Uppercase => UPPERCASE,
            CharClass::Lowercase => LOWERCASE,
            CharClass::Digits => DIGITS,
            CharClass::Symbols => SYMBOLS,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            CharClass::Uppercase => "Include Uppercase letters",
            CharClass::Lowercase => "Include Lowercase letters",
            CharClass::Digits => "Include Numbers",
            CharClass::Symbols => "Include Symbols",
        }
    }
}

/// The four class toggles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ClassSet {
    pub uppercase: bool,
    pub lowercase: bool,
    pub digits: bool,
    pub symbols: bool,
}

impl ClassSet {
    pub const NONE: ClassSet = ClassSet {
        uppercase: false,
        lowercase: false,
        digits: false,
        symbols: false,
    };

    pub const ALL: ClassSet = ClassSet {
        uppercase: true,
        lowercase: true,
        digits: true,
        symbols: true,
    };

    #[cfg(test)]
    pub fn only(class: CharClass) -> Self {
        let mut set = Self::NONE;
        set.set(class, true);
        set
    }

    pub fn contains(&self, class: CharClass) -> bool {
        match class {
            CharClass::Uppercase => self.uppercase,
            CharClass::Lowercase => self.lowercase,
            CharClass::Digits => self.digits,
            CharClass::Symbols => self.symbols,
        }
    }

    pub fn set(&mut self, class: CharClass, on: bool) {
        match class {
            CharClass::Uppercase => self.uppercase = on,
            CharClass::Lowercase => self.lowercase = on,
            CharClass::Digits => self.digits = on,
            CharClass::Symbols => self.symbols = on,
        }
    }

    pub fn toggle(&mut self, class: CharClass) {
        self.set(class, !self.contains(class));
    }

    pub fn is_empty(&self) -> bool {
        !(self.uppercase || self.lowercase || self.digits || self.symbols)
    }

    /// Enabled classes, in pool order.
    pub fn iter(&self) -> impl Iterator<Item = CharClass> + '_ {
        CharClass::ALL.into_iter().filter(|c| self.contains(*c))
    }
}

/// Build the character pool from the enabled classes.
pub fn build(classes: ClassSet) -> Vec<u8> {
    let mut chars = Vec::with_capacity(size(classes));
    for class in classes.iter() {
        chars.extend_from_slice(class.alphabet().as_bytes());
    }
    chars
}

/// Pool size without building it (for entropy calculation).
pub fn size(classes: ClassSet) -> usize {
    classes.iter().map(|c| c.alphabet().len()).sum()
}
