//! Built-in farming question/answer data.

pub(super) const TEXT_ENTRIES: &[(&str, &str)] = &[
    (
        "what crops should i plant in summer",
        "For summer crops, consider planting tomatoes, cucumbers, peppers, eggplant, okra, and corn. These heat-loving crops thrive in warm weather. Make sure to provide adequate water and mulching.",
    ),
    (
        "how to prevent pest attacks",
        "To prevent pest attacks: 1) Use crop rotation, 2) Plant companion crops like marigolds, 3) Apply neem oil spray, 4) Maintain proper plant spacing for air circulation, 5) Regular inspection of crops.",
    ),
    (
        "best fertilizer for vegetables",
        "For vegetables, use a balanced NPK fertilizer (10-10-10) during planting. Apply compost or well-rotted manure before planting. For leafy greens, use nitrogen-rich fertilizer. For fruiting plants, use phosphorus and potassium-rich fertilizer.",
    ),
    (
        "when to harvest tomatoes",
        "Harvest tomatoes when they start turning color but are still firm. They will continue to ripen after picking. For best flavor, harvest when fully red but still firm to touch.",
    ),
    (
        "soil preparation tips",
        "For soil preparation: 1) Test soil pH (6.0-7.0 ideal), 2) Add organic compost, 3) Till soil to 8-10 inches deep, 4) Remove weeds and debris, 5) Add necessary amendments based on soil test.",
    ),
    (
        "watering schedule for plants",
        "Water early morning or evening to reduce evaporation. Most vegetables need 1-2 inches of water per week. Check soil moisture 2-3 inches deep. Water deeply but less frequently to encourage deep root growth.",
    ),
    (
        "how to control aphids",
        "For aphids: spray with insecticidal soap, introduce ladybugs, plant companion herbs like basil and mint, or use neem oil spray. Remove heavily infested leaves.",
    ),
    (
        "organic farming tips",
        "Organic farming tips: use compost and organic fertilizers, practice crop rotation, encourage beneficial insects, use natural pest deterrents, maintain soil health with cover crops.",
    ),
    (
        "greenhouse management",
        "Greenhouse management: maintain proper ventilation, monitor temperature (65-75°F ideal), ensure adequate lighting, water consistently, and sanitize equipment regularly.",
    ),
    (
        "crop rotation benefits",
        "Crop rotation prevents soil depletion, reduces pest and disease cycles, improves soil structure, increases biodiversity, and can naturally fix nitrogen in soil.",
    ),
];

pub(super) const IMAGE_ENTRIES: &[(&str, &str)] = &[
    (
        "leaf_disease",
        "This appears to be a fungal disease on your plant leaves. Remove affected leaves immediately and apply a copper-based fungicide. Ensure good air circulation and avoid watering the leaves directly.",
    ),
    (
        "pest_damage",
        "I can see pest damage on your crops. This looks like aphid or whitefly damage. Spray with insecticidal soap or neem oil solution. You can also introduce beneficial insects like ladybugs.",
    ),
    (
        "soil_problem",
        "Your soil appears to have drainage issues. Consider adding organic matter like compost or perlite to improve drainage. Raised beds might also help with water management.",
    ),
    (
        "crop_growth",
        "Your crops are looking healthy! Continue your current care routine. Make sure to maintain consistent watering and consider side-dressing with compost for continued growth.",
    ),
    (
        "nutrient_deficiency",
        "This shows signs of nitrogen deficiency - yellowing leaves starting from bottom. Apply a nitrogen-rich fertilizer or add compost to boost soil nutrients.",
    ),
    (
        "wilting_plants",
        "Plant wilting can be due to overwatering, underwatering, or root problems. Check soil moisture and drainage. If soil is waterlogged, improve drainage. If dry, water deeply.",
    ),
    (
        "flowering_stage",
        "Your plants are in the flowering stage! Reduce nitrogen and increase phosphorus and potassium. Ensure consistent watering and avoid disturbing the roots.",
    ),
    (
        "harvest_ready",
        "These crops look ready for harvest! Harvest in the early morning for best quality. Use clean, sharp tools and handle produce gently to avoid damage.",
    ),
];

pub(super) const VOICE_ENTRIES: &[(&str, &str)] = &[
    (
        "pest",
        "🎧 For natural pest control: Use companion planting with marigolds and herbs, apply neem oil spray weekly, introduce beneficial insects like ladybugs, and maintain proper plant spacing for air circulation.",
    ),
    (
        "aphid",
        "🎧 For aphid treatment: Spray affected plants with a strong water stream to dislodge them, apply insecticidal soap solution, or use neem oil. Natural predators like ladybugs and lacewings are excellent biological controls. Avoid over-fertilizing with nitrogen as it attracts aphids.",
    ),
    (
        "water",
        "🎧 Smart watering tips: Water deeply but less frequently, early morning is ideal (6-8 AM), check soil moisture 2-3 inches deep, use mulch to retain moisture, and adjust frequency based on weather conditions.",
    ),
    (
        "fertilizer",
        "🎧 Organic fertilizer recommendations: Use compost tea for gentle feeding, fish emulsion for nitrogen boost, bone meal for phosphorus, kelp meal for trace minerals. Apply according to plant growth stage and season.",
    ),
    (
        "harvest",
        "🎧 Harvesting best practices: Pick vegetables in early morning when they're crisp and full of moisture, use clean sharp tools, handle gently to avoid damage, and harvest regularly to encourage continued production.",
    ),
    (
        "disease",
        "🎧 Disease prevention strategies: Ensure good air circulation between plants, avoid overhead watering, rotate crops annually, remove diseased plant material immediately, and use resistant varieties when available.",
    ),
    (
        "soil",
        "🎧 Soil health improvement: Test soil pH regularly (6.0-7.0 ideal for most crops), add organic compost annually, avoid walking on wet soil, practice crop rotation, and use cover crops in off-season.",
    ),
    (
        "compost",
        "🎧 Composting success tips: Balance green materials (kitchen scraps, grass clippings) with brown materials (dry leaves, paper), turn pile weekly, maintain moisture like a wrung-out sponge, and be patient - good compost takes 3-6 months.",
    ),
    (
        "planting",
        "🎧 Smart planting advice: Start with soil preparation, choose varieties suited to your climate zone, follow spacing recommendations, plant at proper depth (generally 2-3 times seed diameter), and keep soil consistently moist until germination.",
    ),
    (
        "organic",
        "🎧 Organic farming principles: Build healthy soil with compost and organic matter, use natural pest management, choose disease-resistant varieties, practice crop diversity, and work with nature's cycles rather than against them.",
    ),
];

/// Voice synonyms. Order is precedence: earlier keywords win.
pub(super) const VOICE_KEYWORDS: &[(&str, &str)] = &[
    ("pest", "pest"),
    ("bug", "pest"),
    ("insect", "pest"),
    ("aphid", "aphid"),
    ("water", "water"),
    ("irrigation", "water"),
    ("fertiliz", "fertilizer"),
    ("nutrient", "fertilizer"),
    ("harvest", "harvest"),
    ("pick", "harvest"),
    ("disease", "disease"),
    ("sick", "disease"),
    ("soil", "soil"),
    ("dirt", "soil"),
    ("compost", "compost"),
    ("plant", "planting"),
    ("seed", "planting"),
    ("organic", "organic"),
];

pub(super) const DEFAULT_TEXT: &str = "I'm sorry, I don't have specific information about that. As a demo chatbot, I have limited responses. Try asking about summer crops, pest prevention, fertilizers, harvesting, soil preparation, or watering schedules.";

pub(super) const DEFAULT_IMAGE: &str = "I can see your image. For this demo, I can help identify common issues like leaf diseases, pest damage, soil problems, crop growth status, and nutrient deficiencies. Please upload images with descriptive filenames.";

pub(super) const DEFAULT_VOICE: &str = "🎧 I received your voice message! For this demo, I can respond to questions about: pests, aphids, watering, fertilizers, harvesting, diseases, soil, composting, planting, and organic farming. Try naming your audio files with these keywords for better responses.";
