#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    Makanan,
    Transportasi,
    Pendidikan,
    Hiburan,
    Kebutuhan,
    Kesehatan,
    Lainnya,
}

impl Category {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Makanan => "makanan",
            Self::Transportasi => "transportasi",
            Self::Pendidikan => "pendidikan",
            Self::Hiburan => "hiburan",
            Self::Kebutuhan => "kebutuhan",
            Self::Kesehatan => "kesehatan",
            Self::Lainnya => "lainnya",
        }
    }

    /// Parse a stored category name. Anything outside the fixed set lands in
    /// `Lainnya` so a row can never carry free text as its category.
    pub fn parse(s: &str) -> Self {
        let name = s.trim().to_lowercase();
        Self::all()
            .iter()
            .copied()
            .find(|c| c.as_str() == name)
            .unwrap_or(Self::Lainnya)
    }

    pub fn all() -> &'static [Category] {
        &[
            Self::Makanan,
            Self::Transportasi,
            Self::Pendidikan,
            Self::Hiburan,
            Self::Kebutuhan,
            Self::Kesehatan,
            Self::Lainnya,
        ]
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
