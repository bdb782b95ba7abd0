use crate::message::ChatRequest;
use crate::services::completion::Message;

const ITINERARY_SYSTEM: &str = r#"Inputs expected:
City Name
Number of Days

Output:
Trip Plan: Day-by-day, 2–3 highlights per day, each with a short "why it's interesting." Tone: fast, casual, cheerful, with a bit of British flair ("brilliant," "worth a look").
Reddit Gems: Pull 2–3 highly upvoted (>100) tips from Reddit (subreddit first, or top posts if no subreddit). Write them like a mate passing tips along ("One Redditor swore by this…").

Sign off all messages with
- Enjoy your next ADVEN-CHEER!"#;

const FREE_FORM_SYSTEM: &str = "You are a helpful travel assistant for AdvenCheers Travel. \
You help users plan amazing travel experiences with enthusiasm and expertise. \
Always be friendly, informative, and end responses with \"- Enjoy your next ADVEN-CHEER!\"";

/// One of the two fixed templates, picked per request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Prompt {
    Itinerary { city: String, num_days: u32 },
    FreeForm { message: String },
}

impl Prompt {
    /// Pick the template for a request. A city plus day count wins over a
    /// free-form message; empty strings and a zero day count do not count as
    /// present.
    pub fn select(req: &ChatRequest) -> Option<Self> {
        let city = req.city.as_deref().filter(|city| !city.is_empty());
        let num_days = req.num_days.filter(|days| *days != 0);

        if let (Some(city), Some(num_days)) = (city, num_days) {
            return Some(Prompt::Itinerary {
                city: city.to_string(),
                num_days,
            });
        }

        let message = req.message.as_deref().filter(|msg| !msg.is_empty())?;
        Some(Prompt::FreeForm {
            message: message.to_string(),
        })
    }

    pub fn kind(&self) -> &'static str {
        match self {
            Prompt::Itinerary { .. } => "itinerary",
            Prompt::FreeForm { .. } => "free_form",
        }
    }

    /// Render the system and user turns sent to the completion API.
    pub fn into_messages(self) -> Vec<Message> {
        match self {
            Prompt::Itinerary { city, num_days } => vec![
                Message::system(ITINERARY_SYSTEM),
                Message::user(format!(
                    "Help me plan a trip for {num_days} days in {city}"
                )),
            ],
            Prompt::FreeForm { message } => {
                vec![Message::system(FREE_FORM_SYSTEM), Message::user(message)]
            }
        }
    }
}
