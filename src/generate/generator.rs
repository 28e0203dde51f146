use rand::Rng;
use rand::rngs::ThreadRng;

use crate::core::{BASE_NUMBER_LEN, BaseNumber, Category, CodeTables, HoujinNumber};

/// Digit 1 of every non-registered organization number.
const NON_REGISTERED_SELECTOR: u8 = b'7';

/// Width of the random serial after a government or registry code.
const SERIAL_WIDTH: usize = 6;

/// Random houjin number generator over a set of code tables.
///
/// The random source is injected, so a seeded RNG gives a reproducible
/// sequence:
///
/// ```rust
/// use houjin::CodeTables;
/// use houjin::generate::Generator;
/// use rand::SeedableRng;
/// use rand::rngs::StdRng;
///
/// let mut a = Generator::new(CodeTables::builtin(), StdRng::seed_from_u64(7));
/// let mut b = Generator::new(CodeTables::builtin(), StdRng::seed_from_u64(7));
/// assert_eq!(a.generate(), b.generate());
/// ```
///
/// Every number it returns validates against the tables it was built with.
#[derive(Debug, Clone)]
pub struct Generator<'a, R> {
    tables: &'a CodeTables,
    rng: R,
}

impl Generator<'static, ThreadRng> {
    /// Generator over the built-in tables using the thread-local RNG.
    pub fn thread_local() -> Self {
        Self::new(CodeTables::builtin(), rand::rng())
    }
}

impl<'a, R: Rng> Generator<'a, R> {
    /// Generator drawing codes from `tables` and randomness from `rng`.
    pub fn new(tables: &'a CodeTables, rng: R) -> Self {
        Self { tables, rng }
    }

    /// The tables numbers are drawn from.
    pub fn tables(&self) -> &'a CodeTables {
        self.tables
    }

    /// Give back the random source.
    pub fn into_rng(self) -> R {
        self.rng
    }

    /// Government body: a government code followed by a 6-digit serial.
    pub fn government(&mut self) -> HoujinNumber {
        let tables = self.tables;
        let code = pick(&mut self.rng, tables.government_codes());
        self.with_serial(code)
    }

    /// Registered corporation: registry office code, organization code and
    /// a 6-digit serial.
    pub fn registered_corporation(&mut self) -> HoujinNumber {
        let tables = self.tables;
        let office = pick(&mut self.rng, tables.registry_office_codes());
        let organization = pick(&mut self.rng, tables.organization_codes());
        self.with_serial(&format!("{office}{organization}"))
    }

    /// Non-registered organization: '7' followed by 11 random digits.
    pub fn non_registered(&mut self) -> HoujinNumber {
        let mut base = [0u8; BASE_NUMBER_LEN];
        base[0] = NON_REGISTERED_SELECTOR;
        fill_random_digits(&mut self.rng, &mut base[1..]);
        BaseNumber::from_ascii(base).with_check_digit()
    }

    /// Any category: 10% government, 10% non-registered, 80% registered
    /// corporation.
    pub fn generate(&mut self) -> HoujinNumber {
        match self.rng.random_range(0u8..10) {
            0 => self.government(),
            1 => self.non_registered(),
            _ => self.registered_corporation(),
        }
    }

    /// A number of the given category, or `None` for [`Category::Invalid`].
    pub fn generate_category(&mut self, category: Category) -> Option<HoujinNumber> {
        match category {
            Category::Government => Some(self.government()),
            Category::RegisteredCorporation => Some(self.registered_corporation()),
            Category::NonRegistered => Some(self.non_registered()),
            Category::Invalid => None,
        }
    }

    /// `prefix` (6 digits from the code tables) plus a random serial.
    fn with_serial(&mut self, prefix: &str) -> HoujinNumber {
        let mut base = [0u8; BASE_NUMBER_LEN];
        let (head, serial) = base.split_at_mut(BASE_NUMBER_LEN - SERIAL_WIDTH);
        head.copy_from_slice(prefix.as_bytes());
        fill_random_digits(&mut self.rng, serial);
        BaseNumber::from_ascii(base).with_check_digit()
    }
}

/// Endless stream of [`Generator::generate`] results.
impl<R: Rng> Iterator for Generator<'_, R> {
    type Item = HoujinNumber;

    fn next(&mut self) -> Option<Self::Item> {
        Some(self.generate())
    }
}

/// Uniform choice from a non-empty table.
fn pick<'t, R: Rng>(rng: &mut R, codes: &'t [String]) -> &'t str {
    &codes[rng.random_range(0..codes.len())]
}

/// Fill `dst` with the ASCII digits of a value drawn uniformly from
/// `[10^(w-1), 10^w - 1]`, `w = dst.len()`, so the first digit is never 0.
fn fill_random_digits<R: Rng>(rng: &mut R, dst: &mut [u8]) {
    let low = 10u64.pow(dst.len() as u32 - 1);
    let mut value = rng.random_range(low..low * 10);
    for slot in dst.iter_mut().rev() {
        *slot = b'0' + (value % 10) as u8;
        value /= 10;
    }
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    use super::*;
    use crate::core::{validate_checksum, validate_number};

    fn seeded(seed: u64) -> Generator<'static, StdRng> {
        Generator::new(CodeTables::builtin(), StdRng::seed_from_u64(seed))
    }

    #[test]
    fn government_numbers() {
        let mut g = seeded(1);
        for _ in 0..200 {
            let n = g.government();
            assert!(CodeTables::builtin().is_government_code(n.government_code()));
            assert_ne!(n.serial().as_bytes()[0], b'0', "{n}");
            assert_eq!(n.category(), Category::Government);
            assert!(validate_number(n.as_str()).is_ok());
        }
    }

    #[test]
    fn registered_numbers() {
        let mut g = seeded(2);
        for _ in 0..200 {
            let n = g.registered_corporation();
            assert!(CodeTables::builtin().is_registry_office_code(n.registry_office_code()));
            assert!(CodeTables::builtin().is_organization_code(n.organization_code()));
            assert_ne!(n.serial().as_bytes()[0], b'0', "{n}");
            assert!(validate_number(n.as_str()).is_ok());
        }
    }

    #[test]
    fn non_registered_numbers() {
        let mut g = seeded(3);
        for _ in 0..200 {
            let n = g.non_registered();
            assert_eq!(n.category_selector(), 7);
            assert_ne!(n.as_str().as_bytes()[2], b'0', "{n}");
            assert_eq!(n.category(), Category::NonRegistered);
            assert!(validate_checksum(n.as_str()).is_ok());
        }
    }

    #[test]
    fn same_seed_same_sequence() {
        let a: Vec<_> = seeded(42).take(50).collect();
        let b: Vec<_> = seeded(42).take(50).collect();
        assert_eq!(a, b);
    }

    #[test]
    fn category_mix() {
        let mut counts = [0usize; 3];
        for n in seeded(4).take(2000) {
            match n.category() {
                Category::Government => counts[0] += 1,
                Category::RegisteredCorporation => counts[1] += 1,
                Category::NonRegistered => counts[2] += 1,
                Category::Invalid => panic!("generated invalid number {n}"),
            }
        }
        assert!(counts[0] > 0 && counts[2] > 0, "{counts:?}");
        assert!(counts[1] > 1400, "{counts:?}");
    }

    #[test]
    fn generate_category_dispatch() {
        let mut g = seeded(5);
        for category in [
            Category::Government,
            Category::RegisteredCorporation,
            Category::NonRegistered,
        ] {
            let n = g.generate_category(category).unwrap();
            assert_eq!(n.category(), category);
        }
        assert!(g.generate_category(Category::Invalid).is_none());
    }

    #[test]
    fn random_digits_keep_width() {
        let mut rng = StdRng::seed_from_u64(6);
        for width in 1..=11 {
            let mut buf = vec![0u8; width];
            fill_random_digits(&mut rng, &mut buf);
            assert!(buf.iter().all(u8::is_ascii_digit));
            assert_ne!(buf[0], b'0');
        }
    }

    #[test]
    fn custom_tables_round_trip() {
        let tables = CodeTables::new(["000077"], ["4500", "0999"], ["10", "99"]).unwrap();
        let mut g = Generator::new(&tables, StdRng::seed_from_u64(8));
        for n in g.by_ref().take(300) {
            assert!(tables.validate_number(n.as_str()).is_ok(), "{n}");
        }
        assert_eq!(g.government().government_code(), "000077");
    }
}
