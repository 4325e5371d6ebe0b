//! Sample discovery batch for development and tests.

use crate::domain::discovery::{DiscoveryProfile, TraitQuestion};
use crate::domain::foundation::{ProfileId, TraitId};

fn profile(id: &str, age: u8, board: [(&str, &str, &str); 8]) -> DiscoveryProfile {
    let questions = board
        .into_iter()
        .map(|(trait_id, question, answer)| {
            TraitQuestion::new(TraitId::new(trait_id).unwrap(), question, answer).unwrap()
        })
        .collect();
    DiscoveryProfile::new(
        ProfileId::new(id).unwrap(),
        age,
        Some("PGP 2024-26".to_string()),
        questions,
        8,
    )
    .unwrap()
}

/// A full eight-profile batch with 4x2 boards of campus-flavoured cards.
pub fn sample_profiles() -> Vec<DiscoveryProfile> {
    vec![
        profile(
            "profile-1",
            23,
            [
                ("hangout", "Tea Post or Nestle?", "Tea Post"),
                ("schedule", "Morning or night person?", "Early bird"),
                ("weekend", "Ideal weekend?", "Sports + friends"),
                ("priority", "Career or experiences?", "Career first"),
                ("study", "Study spot?", "Library"),
                ("social", "Party or small group?", "Small group"),
                ("fitness", "Workout routine?", "Daily gym"),
                ("food", "Mess or outside?", "Outside"),
            ],
        ),
        profile(
            "profile-2",
            22,
            [
                ("hangout", "Tea Post or Nestle?", "Room chai"),
                ("schedule", "Morning or night person?", "Night owl"),
                ("weekend", "Ideal weekend?", "Solo reading"),
                ("priority", "Career or experiences?", "Experiences"),
                ("creative", "Creative outlet?", "Writing"),
                ("social", "Party or small group?", "One-on-one"),
                ("spiritual", "Meditation?", "Daily"),
                ("campus", "Favourite spot?", "Heritage walk"),
            ],
        ),
        profile(
            "profile-3",
            24,
            [
                ("hangout", "Tea Post or Nestle?", "Either works"),
                ("schedule", "Morning or night person?", "Flexible"),
                ("weekend", "Ideal weekend?", "Food + chill"),
                ("priority", "Career or experiences?", "Balance"),
                ("humor", "Comedy style?", "Dry humor"),
                ("social", "Party or small group?", "Big parties"),
                ("food", "Mess or outside?", "Foodie life"),
                ("stress", "Stress relief?", "Good food"),
            ],
        ),
        profile(
            "profile-4",
            23,
            [
                ("hangout", "Tea Post or Nestle?", "Vending machine"),
                ("schedule", "Morning or night person?", "Night owl"),
                ("weekend", "Ideal weekend?", "Finish work"),
                ("priority", "Career or experiences?", "Career"),
                ("academic", "Grade focus?", "Top 10%"),
                ("social", "Party or small group?", "Study group"),
                ("organize", "Planning style?", "Very detailed"),
                ("ambition", "5-year goal?", "Leadership"),
            ],
        ),
        profile(
            "profile-5",
            22,
            [
                ("hangout", "Tea Post or Nestle?", "Wherever"),
                ("schedule", "Morning or night person?", "Random"),
                ("weekend", "Ideal weekend?", "Road trip"),
                ("priority", "Career or experiences?", "Stories"),
                ("creative", "Creative outlet?", "Photography"),
                ("social", "Party or small group?", "New people"),
                ("travel", "Travel style?", "Spontaneous"),
                ("curious", "Learning how?", "Conversations"),
            ],
        ),
        profile(
            "profile-6",
            25,
            [
                ("hangout", "Tea Post or Nestle?", "Green tea"),
                ("schedule", "Morning or night person?", "5am club"),
                ("weekend", "Ideal weekend?", "Long run"),
                ("priority", "Career or experiences?", "Self-growth"),
                ("fitness", "Workout routine?", "Yoga daily"),
                ("social", "Party or small group?", "Solo time"),
                ("spiritual", "Meditation?", "Essential"),
                ("health", "Diet?", "Clean eating"),
            ],
        ),
        profile(
            "profile-7",
            23,
            [
                ("hangout", "Tea Post or Nestle?", "Both!"),
                ("schedule", "Morning or night person?", "All-nighter"),
                ("weekend", "Ideal weekend?", "Events"),
                ("priority", "Career or experiences?", "Network"),
                ("humor", "Comedy style?", "Memes"),
                ("social", "Party or small group?", "Big crowd"),
                ("food", "Mess or outside?", "4am Maggi"),
                ("ambition", "5-year goal?", "Consulting"),
            ],
        ),
        profile(
            "profile-8",
            22,
            [
                ("hangout", "Tea Post or Nestle?", "Tea Post"),
                ("schedule", "Morning or night person?", "Midnight"),
                ("weekend", "Ideal weekend?", "Art + music"),
                ("priority", "Career or experiences?", "Meaning"),
                ("creative", "Creative outlet?", "Poetry"),
                ("social", "Party or small group?", "Deep talks"),
                ("spiritual", "Meditation?", "Sometimes"),
                ("curious", "Learning how?", "Books"),
            ],
        ),
    ]
}
