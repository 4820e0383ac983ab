//! Static caption tables.
//!
//! One [`TemplateCaptions`] row per meme template and one [`PosterEntry`]
//! bucket per poster category. Every bucket is non-empty.

use crate::{PosterCategory, Tone};

/// Canned captions for one meme template, one bucket per tone.
///
/// Multi-panel captions separate panels with `" | "`.
#[derive(Debug)]
pub struct TemplateCaptions {
    /// Template title as shown in the catalog; this is the lookup key.
    pub template: &'static str,
    pub funny: &'static [&'static str],
    pub sarcastic: &'static [&'static str],
    pub professional: &'static [&'static str],
    pub gen_z: &'static [&'static str],
    pub formal: &'static [&'static str],
}

impl TemplateCaptions {
    /// The bucket for `tone`.
    #[must_use]
    pub fn bucket(&self, tone: Tone) -> &'static [&'static str] {
        match tone {
            Tone::Funny => self.funny,
            Tone::Sarcastic => self.sarcastic,
            Tone::Professional => self.professional,
            Tone::GenZ => self.gen_z,
            Tone::Formal => self.formal,
        }
    }
}

/// One pre-written poster text triple.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PosterEntry {
    pub heading: &'static str,
    pub subheading: &'static str,
    pub body: &'static str,
}

/// Template used when the requested template title is not in [`MEME_CAPTIONS`].
pub const DEFAULT_TEMPLATE: &str = "Drake Meme";

pub static MEME_CAPTIONS: &[TemplateCaptions] = &[
    TemplateCaptions {
        template: "Drake Meme",
        funny: &[
            "Studying for exams | Playing video games",
            "Eating healthy | Ordering pizza at 2am",
            "Going to bed early | Scrolling TikTok until 3am",
            "Working hard | Getting promoted for luck",
            "My resume | My actual skills",
        ],
        sarcastic: &[
            "Trying to be productive | Actually productive",
            "My goals | My reality",
            "What I want to do | What I have to do",
            "My expectations | My life",
            "Healthy lifestyle | junk food",
        ],
        professional: &[
            "Strategic planning | Execution excellence",
            "Team collaboration | Project success",
            "Innovation focus | Market leadership",
            "Process improvement | Efficiency gains",
            "Skill development | Career growth",
        ],
        gen_z: &[
            "No cap this hits different | Actually no",
            "Giving main character | Plot twist I am not",
            "It is serving | It is not serving",
            "Periodt | Actually wait",
            "No literally | I was joking lol",
        ],
        formal: &[
            "Objective one | Objective two",
            "First consideration | Second consideration",
            "Primary focus | Secondary focus",
            "Initial approach | Alternative approach",
            "Preferred outcome | Adverse outcome",
        ],
    },
    TemplateCaptions {
        template: "Distracted Boyfriend",
        funny: &[
            "Me ignoring homework | New meme template",
            "My diet plan | That pizza slice",
            "My productivity | Social media",
            "My goals | Procrastination",
            "Work | Reddit",
        ],
        sarcastic: &[
            "My responsibilities | My hobbies",
            "What I should do | What I want to do",
            "Real life | My fantasy life",
            "Commitment | Distraction",
            "Adulthood | Anything else",
        ],
        professional: &[
            "Client needs | Alternative solutions",
            "Project priority | Resource allocation",
            "Market strategy | Competitive advantage",
            "Stakeholder value | Cost optimization",
            "Business growth | Market expansion",
        ],
        gen_z: &[
            "Me being responsible | Me when freedom calls",
            "My job | My mental health",
            "Growing up | My childhood",
            "Responsibilities | Vibes",
            "Commitment | No cap this is cringe",
        ],
        formal: &[
            "Primary objective | Secondary objective",
            "Assigned duty | Competing interest",
            "Mandatory task | Discretionary activity",
            "Work obligation | Personal preference",
            "Scheduled commitment | Alternative engagement",
        ],
    },
    TemplateCaptions {
        template: "Loss Meme",
        funny: &[
            "Feeling great | Reading bad news | Crying | Moving on",
            "Getting a promotion | Losing it immediately | Fake laughing | Internally screaming",
            "Planning my day | Existing | Forgetting my plan | Existing",
            "Monday morning | Monday at work | Monday afternoon | Monday night",
            "Summer plans | Reality of summer | My savings | My mental health",
        ],
        sarcastic: &[
            "My potential | My effort | My results | My future",
            "Expectations | Reality | Acceptance | Denial",
            "Hope | Disappointment | Acceptance | Crying",
            "Me | Also me | Still me | Definitely still me",
            "My confidence | First setback | Depression | Recovery",
        ],
        professional: &[
            "Quarter 1 goals | Quarter 2 outcomes | Quarter 3 analysis | Quarter 4 forecast",
            "Project initiation | Development phase | Testing phase | Deployment phase",
            "Strategy formation | Implementation | Evaluation | Adjustment",
            "Market entry | Growth phase | Maturity phase | Exit planning",
            "Problem identification | Solution development | Rollout | Optimization",
        ],
        gen_z: &[
            "New year new me | Still the same | Giving up | Already forgot",
            "My motivation | Actual motivation | Coping mechanism | Acceptance",
            "Hype | Reality check | Denial era | Healing journey",
            "The vibe | Plot twist | Character development | Redemption",
            "The dream | The struggle | The pain | The lessons",
        ],
        formal: &[
            "Phase One | Phase Two | Phase Three | Phase Four",
            "Initial state | Transitional state | Critical state | Final state",
            "Stage A | Stage B | Stage C | Stage D",
            "Period one | Period two | Period three | Period four",
            "Step one | Step two | Step three | Step four",
        ],
    },
    TemplateCaptions {
        template: "Motivational Poster",
        funny: &[
            "You miss 100% of the shots you do not take",
            "I am not lazy, I am just on energy-saving mode",
            "Be yourself; everyone else is already taken",
            "Coffee: because murder is illegal",
            "Adulting is like being a beginner at everything",
        ],
        sarcastic: &[
            "Because giving up is not an option... unfortunately",
            "Success is just failure that has not happened yet",
            "Believe in yourself when no one else does",
            "The struggle is real, the coffee is realer",
            "Excellence is not a destination, it is exhausting",
        ],
        professional: &[
            "Excellence through continuous improvement",
            "Leadership through vision and execution",
            "Innovation drives market transformation",
            "Synergy creates sustainable growth",
            "Strategic alignment enables success",
        ],
        gen_z: &[
            "Your potential is literally immaculate",
            "Manifest that energy and watch it happen",
            "No cap you are that person",
            "The universe is conspiring in your favor",
            "Literally just believe and it will happen periodt",
        ],
        formal: &[
            "Strive for excellence in all endeavors",
            "Pursue your objectives with determination",
            "Commit to ongoing professional development",
            "Embrace challenges as opportunities",
            "Foster an environment of continuous growth",
        ],
    },
    TemplateCaptions {
        template: "Event Poster",
        funny: &[
            "SAVE THE DATE - You will definitely want to be here",
            "YOU ARE INVITED - (Please send regrets beforehand)",
            "MARK YOUR CALENDAR - We are too excited",
            "DO NOT MISS THIS - Unlike your other plans",
            "COMING SOON - Probably",
        ],
        sarcastic: &[
            "SAVE THE DATE - If you feel like it",
            "YOU ARE CORDIALLY INVITED - Probably not really",
            "MARK YOUR CALENDAR - We are not sure you will come",
            "DO NOT MISS OUT - Jk we will be fine either way",
            "COMING SOON - Whenever we finish planning",
        ],
        professional: &[
            "ATTEND OUR PREMIER EVENT - Transform Your Business",
            "EXCLUSIVE OPPORTUNITY - Network with Industry Leaders",
            "REGISTER NOW - Limited Capacity Available",
            "JOIN US - Innovation Meets Excellence",
            "SAVE YOUR SEAT - Executive Summit 2024",
        ],
        gen_z: &[
            "THIS EVENT WILL HIT DIFFERENT - Come through",
            "YOU NEED TO BE THERE - Literally periodt",
            "MARK YOUR CALENDAR - No cap it is giving main character",
            "RSVP ASAP - Spots filling up fr fr",
            "COMING SOON - Prepare to have the time of your life",
        ],
        formal: &[
            "ATTEND OUR DISTINGUISHED GATHERING",
            "YOU ARE CORDIALLY INVITED TO A SPECIAL OCCASION",
            "PLEASE MARK YOUR CALENDAR FOR THIS IMPORTANT EVENT",
            "RESERVE YOUR ATTENDANCE AT THIS EXCLUSIVE OCCASION",
            "ATTENDEES REQUESTED FOR THIS PREMIER GATHERING",
        ],
    },
    TemplateCaptions {
        template: "Blank Canvas",
        funny: &["Add your own text", "Make something amazing", "Your creativity here", "Start creating now"],
        sarcastic: &["Your text goes here", "If you feel inspired", "Make it funny", "Or not, whatever"],
        professional: &["Add your headline", "Insert your message", "Place your text here", "Your content here"],
        gen_z: &["Slay here", "Make it pop", "This is your moment", "Go off bestie"],
        formal: &["Insert your heading", "Provide your text", "Your message here", "Insert content"],
    },
];

const EVENT: &[PosterEntry] = &[
    PosterEntry {
        heading: "ANNUAL TECH SUMMIT 2024",
        subheading: "Innovation Meets Tomorrow",
        body: "Join industry leaders for groundbreaking insights and networking opportunities. Register Now!",
    },
    PosterEntry {
        heading: "CREATIVE WORKSHOP",
        subheading: "Unlock Your Artistic Potential",
        body: "Master new techniques from expert instructors. Limited seats available. Enroll today!",
    },
    PosterEntry {
        heading: "NETWORKING CONFERENCE",
        subheading: "Connect with Professionals",
        body: "Expand your network and discover new opportunities. Early bird discounts ending soon!",
    },
];

const WORKSHOP: &[PosterEntry] = &[
    PosterEntry {
        heading: "MASTER CLASS: DIGITAL DESIGN",
        subheading: "Learn from Industry Experts",
        body: "Transform your skills in just one day. Interactive sessions and hands-on projects included.",
    },
    PosterEntry {
        heading: "PROFESSIONAL DEVELOPMENT",
        subheading: "Elevate Your Career",
        body: "Gain certifications and boost your professional growth. Flexible scheduling available.",
    },
    PosterEntry {
        heading: "CODING BOOTCAMP",
        subheading: "Launch Your Tech Career",
        body: "Intensive 12-week program. Job placement guaranteed. Apply with special discount!",
    },
];

const PROMOTION: &[PosterEntry] = &[
    PosterEntry {
        heading: "MEGA SALE EVENT",
        subheading: "Up to 70% OFF Everything",
        body: "Limited time offer. Shop now and save big. Free shipping on orders over $50!",
    },
    PosterEntry {
        heading: "NEW PRODUCT LAUNCH",
        subheading: "Be First to Experience It",
        body: "Revolutionary features you will love. Pre-order today for exclusive launch price.",
    },
    PosterEntry {
        heading: "EXCLUSIVE DEAL",
        subheading: "VIP Members Only",
        body: "Special pricing for loyal customers. Become a member and unlock premium benefits.",
    },
];

const ANNOUNCEMENT: &[PosterEntry] = &[
    PosterEntry {
        heading: "IMPORTANT ANNOUNCEMENT",
        subheading: "New Updates Available",
        body: "Stay informed about latest changes and improvements. Visit our website for more details.",
    },
    PosterEntry {
        heading: "COMMUNITY NOTICE",
        subheading: "Exciting News Coming",
        body: "Something big is happening! Follow us for announcements and be part of the journey.",
    },
    PosterEntry {
        heading: "SPECIAL CELEBRATION",
        subheading: "Join Us in Celebrating",
        body: "Mark your calendars for an unforgettable experience. Spread the word!",
    },
];

const GENERAL: &[PosterEntry] = &[
    PosterEntry {
        heading: "CREATE YOUR MOMENT",
        subheading: "Make It Memorable",
        body: "Stand out from the crowd. Your journey starts here. Let us help you shine.",
    },
    PosterEntry {
        heading: "DREAM BIG",
        subheading: "Achieve More Together",
        body: "Collaborate with like-minded individuals. Build something extraordinary today.",
    },
    PosterEntry {
        heading: "BE INSPIRED",
        subheading: "Transform Your Vision",
        body: "Every great achievement begins with a single step. Take yours now!",
    },
];

/// The poster bucket for `category`.
#[must_use]
pub fn poster_bucket(category: PosterCategory) -> &'static [PosterEntry] {
    match category {
        PosterCategory::Event => EVENT,
        PosterCategory::Workshop => WORKSHOP,
        PosterCategory::Promotion => PROMOTION,
        PosterCategory::Announcement => ANNOUNCEMENT,
        PosterCategory::General => GENERAL,
    }
}
