//! The built-in rule table, in evaluation order

use super::CategoryRule;

pub(super) fn builtin_rules() -> Vec<CategoryRule> {
    vec![
        // Entertainment
        CategoryRule::new(
            "Entertainment",
            "Movies",
            &["movie", "film", "cinema", "imdb", "trailer", "actor", "actress"],
        )
        .with_domains(&["imdb.com", "rottentomatoes.com", "moviefone.com"]),
        CategoryRule::new(
            "Entertainment",
            "TV Shows",
            &["tv", "television", "series", "episode", "season", "netflix", "hulu"],
        )
        .with_domains(&["netflix.com", "hulu.com", "hbo.com"]),
        CategoryRule::new(
            "Entertainment",
            "Music",
            &["music", "song", "album", "artist", "spotify", "apple music"],
        )
        .with_domains(&["spotify.com", "music.apple.com", "soundcloud.com"]),
        CategoryRule::new(
            "Entertainment",
            "Books",
            &["book", "novel", "author", "reading", "literature", "kindle"],
        )
        .with_domains(&["amazon.com/books", "goodreads.com", "audible.com"]),
        CategoryRule::new(
            "Entertainment",
            "Video Games",
            &["game", "gaming", "xbox", "playstation", "nintendo", "steam"],
        )
        .with_domains(&["steam.com", "xbox.com", "playstation.com"]),
        // Travel and Places
        CategoryRule::new(
            "Travel and Places",
            "Destinations",
            &["travel", "destination", "vacation", "trip", "tourism", "visit"],
        ),
        CategoryRule::new(
            "Travel and Places",
            "Hotels and Accommodations",
            &["hotel", "accommodation", "booking", "airbnb", "resort"],
        )
        .with_domains(&["booking.com", "airbnb.com", "hotels.com"]),
        CategoryRule::new(
            "Travel and Places",
            "Restaurants",
            &["restaurant", "dining", "food", "menu", "yelp"],
        )
        .with_domains(&["yelp.com", "opentable.com", "zomato.com"]),
        CategoryRule::new(
            "Travel and Places",
            "Attractions",
            &["attraction", "museum", "park", "landmark", "sightseeing"],
        ),
        CategoryRule::new(
            "Travel and Places",
            "Travel Tips",
            &["travel tips", "guide", "itinerary", "packing", "budget travel"],
        ),
        // Food and Dining
        CategoryRule::new(
            "Food and Dining",
            "Recipes",
            &["recipe", "cooking", "ingredients", "cook", "bake", "kitchen"],
        )
        .with_domains(&["allrecipes.com", "food.com", "epicurious.com"]),
        CategoryRule::new(
            "Food and Dining",
            "Food Reviews",
            &["food review", "restaurant review", "taste", "flavor"],
        ),
        CategoryRule::new(
            "Food and Dining",
            "Cooking Tips",
            &["cooking tips", "chef", "culinary", "technique"],
        ),
        CategoryRule::new(
            "Food and Dining",
            "Dietary Information",
            &["diet", "nutrition", "healthy", "vegan", "vegetarian", "keto"],
        ),
        // Shopping and Products
        CategoryRule::new(
            "Shopping and Products",
            "Electronics",
            &["electronics", "gadget", "phone", "laptop", "computer", "tech"],
        )
        .with_domains(&["amazon.com", "bestbuy.com", "newegg.com"]),
        CategoryRule::new(
            "Shopping and Products",
            "Fashion",
            &["fashion", "clothing", "style", "outfit", "brand"],
        )
        .with_domains(&["zara.com", "h&m.com", "nike.com"]),
        CategoryRule::new(
            "Shopping and Products",
            "Home and Garden",
            &["home", "garden", "furniture", "decor", "diy"],
        ),
        CategoryRule::new(
            "Shopping and Products",
            "Beauty Products",
            &["beauty", "makeup", "skincare", "cosmetics"],
        )
        .with_domains(&["sephora.com", "ulta.com"]),
        CategoryRule::new(
            "Shopping and Products",
            "Sports Equipment",
            &["sports", "equipment", "fitness", "athletic", "gear"],
        ),
        // Education and Learning
        CategoryRule::new(
            "Education and Learning",
            "Online Courses",
            &["course", "learning", "education", "tutorial", "udemy", "coursera"],
        )
        .with_domains(&["udemy.com", "coursera.org", "edx.org"]),
        CategoryRule::new(
            "Education and Learning",
            "Tutorials",
            &["tutorial", "how to", "guide", "learn", "step by step"],
        ),
        CategoryRule::new(
            "Education and Learning",
            "Articles",
            &["article", "blog", "post", "read", "information"],
        ),
        CategoryRule::new(
            "Education and Learning",
            "Research Papers",
            &["research", "paper", "study", "academic", "journal"],
        ),
        // Social Media
        CategoryRule::new(
            "Social Media",
            "Posts",
            &["post", "social", "share", "update"],
        )
        .with_domains(&["facebook.com", "twitter.com", "instagram.com", "linkedin.com"]),
        CategoryRule::new(
            "Social Media",
            "Profiles",
            &["profile", "account", "user", "bio"],
        ),
        CategoryRule::new(
            "Social Media",
            "Events",
            &["event", "meetup", "gathering", "conference"],
        ),
        // News and Media
        CategoryRule::new(
            "News and Media",
            "Articles",
            &["news", "article", "breaking", "report", "journalism"],
        )
        .with_domains(&["cnn.com", "bbc.com", "reuters.com", "nytimes.com"]),
        CategoryRule::new(
            "News and Media",
            "Videos",
            &["video", "watch", "youtube", "documentary"],
        )
        .with_domains(&["youtube.com", "vimeo.com"]),
        CategoryRule::new(
            "News and Media",
            "Podcasts",
            &["podcast", "audio", "listen", "episode"],
        )
        .with_domains(&["spotify.com/podcasts", "apple.com/podcasts"]),
        CategoryRule::new(
            "News and Media",
            "Blogs",
            &["blog", "blogger", "personal", "opinion"],
        ),
        // Health and Fitness
        CategoryRule::new(
            "Health and Fitness",
            "Workouts",
            &["workout", "exercise", "fitness", "gym", "training"],
        ),
        CategoryRule::new(
            "Health and Fitness",
            "Nutrition",
            &["nutrition", "diet", "healthy eating", "vitamins", "supplements"],
        ),
        CategoryRule::new(
            "Health and Fitness",
            "Health Articles",
            &["health", "medical", "wellness", "doctor", "medicine"],
        ),
        CategoryRule::new(
            "Health and Fitness",
            "Wellness Tips",
            &["wellness", "mental health", "self care", "meditation"],
        ),
        // Real Estate
        CategoryRule::new(
            "Real Estate",
            "Property Listings",
            &["property", "house", "apartment", "real estate", "for sale", "for rent"],
        )
        .with_domains(&["zillow.com", "realtor.com", "redfin.com"]),
        CategoryRule::new(
            "Real Estate",
            "Market Trends",
            &["market", "trends", "prices", "housing market"],
        ),
        CategoryRule::new(
            "Real Estate",
            "Home Buying Tips",
            &["home buying", "mortgage", "loan", "first time buyer"],
        ),
        // Edge use cases
        CategoryRule::new(
            "Edge Use Cases",
            "Technology and Gadgets",
            &["technology", "tech", "gadget", "innovation", "software", "hardware"],
        ),
        CategoryRule::new(
            "Edge Use Cases",
            "Legal and Financial",
            &["legal", "law", "financial", "money", "investment", "tax"],
        ),
        CategoryRule::new(
            "Edge Use Cases",
            "Personal Development",
            &["personal development", "self improvement", "productivity", "motivation"],
        ),
    ]
}
