pub mod fake_profile_generator;

pub use fake_profile_generator::FakeProfileGenerator;
