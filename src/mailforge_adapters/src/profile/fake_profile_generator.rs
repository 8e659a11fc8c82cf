use chrono::{Datelike, Days, Months, NaiveDate, Utc};
use fake::Fake;
use fake::faker::address::en::{
    BuildingNumber, CityName, CountryName, StateName, StreetName, ZipCode,
};
use fake::faker::company::en::CompanyName;
use fake::faker::job::en::Title;
use fake::faker::name::en::LastName;
use fake::faker::phone_number::en::PhoneNumber;
use mailforge_core::{PostalAddress, ProfileGenerator, UserProfile};
use rand::Rng;

const MIN_AGE: u32 = 18;
const MAX_AGE: u32 = 65;
const AVATAR_BASE_URL: &str = "https://randomuser.me/api/portraits";

// `fake` only ships an ungendered first-name list.
const MALE_FIRST_NAMES: &[&str] = &[
    "Aaron", "Adam", "Adrian", "Alan", "Albert", "Andrew", "Anthony", "Benjamin", "Brandon",
    "Brian", "Carlos", "Charles", "Christopher", "Daniel", "David", "Dennis", "Edward", "Eric",
    "Frank", "Gabriel", "George", "Gregory", "Henry", "Jack", "James", "Jason", "Jeffrey",
    "John", "Jonathan", "Joseph", "Joshua", "Kenneth", "Kevin", "Lucas", "Mark", "Matthew",
    "Michael", "Nathan", "Nicholas", "Patrick", "Paul", "Peter", "Raymond", "Richard", "Robert",
    "Ryan", "Samuel", "Scott", "Stephen", "Thomas", "Timothy", "Victor", "William",
];

const FEMALE_FIRST_NAMES: &[&str] = &[
    "Abigail", "Alice", "Amanda", "Amy", "Angela", "Anna", "Ashley", "Barbara", "Betty",
    "Carol", "Catherine", "Charlotte", "Christina", "Deborah", "Diana", "Donna", "Elizabeth",
    "Emily", "Emma", "Evelyn", "Grace", "Hannah", "Helen", "Isabella", "Jennifer", "Jessica",
    "Julia", "Karen", "Katherine", "Laura", "Linda", "Lisa", "Margaret", "Maria", "Mary",
    "Megan", "Melissa", "Michelle", "Nancy", "Natalie", "Olivia", "Rachel", "Rebecca", "Sandra",
    "Sarah", "Sophia", "Stephanie", "Susan", "Victoria", "Virginia",
];

/// Persona generator backed by the `fake` crate.
#[derive(Debug, Clone, Copy, Default)]
pub struct FakeProfileGenerator;

impl FakeProfileGenerator {
    pub fn new() -> Self {
        Self
    }

    /// Deterministic variant of [`ProfileGenerator::generate`]: every random
    /// choice is drawn from `rng`, and ages are computed against `today`.
    pub fn generate_with_rng<R: Rng + ?Sized>(
        &self,
        rng: &mut R,
        today: NaiveDate,
    ) -> UserProfile {
        let is_male = rng.random_bool(0.5);
        let gender = if is_male { "male" } else { "female" };

        let first_name = first_name(rng, is_male);
        let last_name: String = LastName().fake_with_rng(rng);
        let birthdate = birthdate(rng, today);

        let building: String = BuildingNumber().fake_with_rng(rng);
        let street: String = StreetName().fake_with_rng(rng);

        UserProfile {
            full_name: format!("{first_name} {last_name}"),
            first_name,
            last_name,
            gender: gender.to_string(),
            age: today.year() - birthdate.year(),
            birthdate: birthdate.format("%Y-%m-%d").to_string(),
            avatar: avatar(rng, is_male),
            address: PostalAddress {
                street: format!("{building} {street}"),
                city: CityName().fake_with_rng(rng),
                state: StateName().fake_with_rng(rng),
                zip_code: ZipCode().fake_with_rng(rng),
                country: CountryName().fake_with_rng(rng),
            },
            phone: PhoneNumber().fake_with_rng(rng),
            occupation: Title().fake_with_rng(rng),
            company: CompanyName().fake_with_rng(rng),
        }
    }
}

impl ProfileGenerator for FakeProfileGenerator {
    fn generate(&self) -> UserProfile {
        self.generate_with_rng(&mut rand::rng(), Utc::now().date_naive())
    }
}

/// Uniform day between `MAX_AGE` and `MIN_AGE` years before `today`.
fn birthdate<R: Rng + ?Sized>(rng: &mut R, today: NaiveDate) -> NaiveDate {
    let latest = today
        .checked_sub_months(Months::new(MIN_AGE * 12))
        .unwrap_or(today);
    let earliest = today
        .checked_sub_months(Months::new(MAX_AGE * 12))
        .unwrap_or(latest);

    let span = (latest - earliest).num_days().max(0) as u64;
    let offset = rng.random_range(0..=span);

    earliest.checked_add_days(Days::new(offset)).unwrap_or(latest)
}

fn first_name<R: Rng + ?Sized>(rng: &mut R, is_male: bool) -> String {
    let names = if is_male {
        MALE_FIRST_NAMES
    } else {
        FEMALE_FIRST_NAMES
    };
    names[rng.random_range(0..names.len())].to_string()
}

fn avatar<R: Rng + ?Sized>(rng: &mut R, is_male: bool) -> String {
    let folder = if is_male { "men" } else { "women" };
    format!("{AVATAR_BASE_URL}/{folder}/{}.jpg", rng.random_range(0..100))
}
