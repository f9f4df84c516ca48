use chrono::{Datelike, NaiveDate};
use serde::Serialize;

#[derive(Debug, Clone, Copy, Serialize)]
pub struct WellnessTopic {
    pub id: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub guidance: &'static str,
}

pub const HEALTH_ADVICE: &[WellnessTopic] = &[
    WellnessTopic {
        id: "general",
        title: "General Wellness",
        description: "Overall wellness advice for a balanced, healthy lifestyle.",
        guidance: "Maintain a consistent sleep schedule, stay hydrated, exercise regularly, and eat \
            balanced meals. Aim for 7-9 hours of sleep, drink at least 8 glasses of water daily, and \
            engage in at least 150 minutes of moderate physical activity per week.",
    },
    WellnessTopic {
        id: "nutrition",
        title: "Nutrition",
        description: "Evidence-based nutritional guidance for optimal health.",
        guidance: "Incorporate a variety of whole foods including fruits, vegetables, lean proteins, \
            and whole grains. Reduce processed foods and added sugars. Consider consulting a \
            nutritionist for personalized meal plans.",
    },
    WellnessTopic {
        id: "sleep",
        title: "Sleep",
        description: "Tips for better sleep quality and sleep hygiene.",
        guidance: "Create a dark, quiet, and cool sleep environment. Avoid screens 30 minutes before \
            bed. Maintain a consistent sleep schedule even on weekends. Try relaxation techniques \
            like deep breathing or meditation.",
    },
    WellnessTopic {
        id: "hydration",
        title: "Hydration",
        description: "Guidance on proper hydration and fluid intake.",
        guidance: "Drink water throughout the day, not just when thirsty. Aim for 2-3 liters daily, \
            adjusting for activity level and climate. Include hydrating foods like fruits and \
            vegetables.",
    },
    WellnessTopic {
        id: "posture",
        title: "Posture",
        description: "Exercises and tips for maintaining healthy posture.",
        guidance: "Keep your shoulders relaxed, maintain neutral spine alignment, and take frequent \
            breaks when sitting. Practice stretching and strengthening exercises daily to support \
            good posture.",
    },
];

pub const MENTAL_PEACE: &[WellnessTopic] = &[
    WellnessTopic {
        id: "mindfulness",
        title: "Mindfulness",
        description: "Present-moment awareness practices to calm your mind.",
        guidance: "Start with 5-10 minute sessions. Sit comfortably and focus on your breath. When \
            your mind wanders, gently bring attention back to the present moment without judgment. \
            Practice daily for best results.",
    },
    WellnessTopic {
        id: "stress-relief",
        title: "Stress Relief",
        description: "Techniques to manage and reduce stress levels.",
        guidance: "Try progressive muscle relaxation: tense and release each muscle group for 5 \
            seconds. Use the 4-7-8 breathing method: inhale for 4 counts, hold for 7, exhale for 8. \
            Practice these daily.",
    },
    WellnessTopic {
        id: "breathing",
        title: "Breathing",
        description: "Breathing exercises for instant calm and relaxation.",
        guidance: "Box breathing: Inhale for 4 counts, hold for 4, exhale for 4, hold for 4. Repeat \
            5-10 times. Alternate nostril breathing: Close right nostril, inhale left, switch, \
            exhale right.",
    },
    WellnessTopic {
        id: "affirmations",
        title: "Affirmations",
        description: "Positive affirmations to build mental resilience.",
        guidance: "Choose 2-3 affirmations that resonate with you. Repeat them daily, preferably in \
            the morning and evening. Examples: \"I am capable,\" \"I am worthy,\" \"I choose peace.\"",
    },
    WellnessTopic {
        id: "meditation",
        title: "Meditation",
        description: "Guided meditation for emotional balance and clarity.",
        guidance: "Find a quiet space and sit comfortably. Close your eyes and focus on a mantra or \
            breath. Start with 10-15 minutes daily. Guided meditation apps can help you get started.",
    },
];

pub const DAILY_INSIGHTS: &[&str] = &[
    "Taking a few minutes for mindful breathing can reset your nervous system and improve your \
     focus throughout the day.",
    "A short walk outside can lift your mood and clear your head more than another cup of coffee.",
    "Writing down three things you are grateful for tonight can help you sleep more peacefully.",
    "It is okay to say no. Protecting your energy is a form of self-care.",
    "Drinking a glass of water when you wake up is a simple way to start the day kindly.",
    "Naming a feeling out loud, even just to yourself, can make it easier to manage.",
    "Reaching out to a friend, even with a short message, strengthens the connections that keep \
     you well.",
];

pub fn find_topic<'a>(topics: &'a [WellnessTopic], id: &str) -> Option<&'a WellnessTopic> {
    topics.iter().find(|t| t.id == id)
}

/// Same insight for the whole of a calendar day, rotating through the list.
pub fn insight_for(date: NaiveDate) -> &'static str {
    DAILY_INSIGHTS[date.ordinal0() as usize % DAILY_INSIGHTS.len()]
}
