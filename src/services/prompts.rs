//! Prompt sent with every photo to the vision service.

/// Asks for a single JSON object matching the `FeatureReport` schema.
pub const FEATURE_EXTRACTION_PROMPT: &str = r#"Analyze this building photo and extract the following information.
Respond ONLY with a valid JSON object (no markdown, no explanation), using this exact structure:

{
    "building_type": "Single Family Residential|Multi-Family Residential|Commercial|Industrial|Mixed Use|Unknown",
    "roof_style": "Gable|Hip|Flat|Mansard|Gambrel|Shed|Butterfly|Unknown",
    "roof_material": "Asphalt Shingle|Metal|Tile|Slate|Wood Shake|Membrane|Unknown",
    "exterior_material": "Vinyl Siding|Wood Siding|Fiber Cement|Brick|Stone|Stucco|Metal|EIFS|Unknown",
    "condition": "Excellent|Good|Fair|Poor|Unknown",
    "architectural_style": "Colonial|Ranch|Craftsman|Victorian|Cape Cod|Tudor|Farmhouse|Modern|Contemporary|Mediterranean|Unknown",
    "stories": <number>,
    "window_count": <number of visible windows>,
    "door_count": <number of visible doors, not including garage>,
    "estimated_window_size": "<width>x<height> ft",
    "estimated_door_size": "<width>x<height> ft",
    "has_garage": true|false,
    "garage_type": "Attached|Detached|Carport|Tuck Under|None",
    "garage_doors": <number>,
    "has_porch": true|false,
    "porch_type": "Front|Wraparound|Screened|Stoop|None",
    "has_deck": true|false,
    "deck_material": "Wood|Composite|Concrete|Stone|None",
    "has_dormers": true|false,
    "dormer_count": <number>,
    "has_chimney": true|false,
    "has_gutters": true|false,
    "has_storm_door": true|false,
    "special_features": ["list", "of", "notable", "features"],
    "photo_quality": "low|medium|high",
    "category_confidence": {
        "building": <0.0 to 1.0>,
        "roof": <0.0 to 1.0>,
        "exterior": <0.0 to 1.0>,
        "openings": <0.0 to 1.0>,
        "attachments": <0.0 to 1.0>
    },
    "overall_confidence": <0.0 to 1.0 based on how clearly features are visible>,
    "notes": "<anything a human estimator should know about this photo>"
}

Be conservative in your estimates. If something is not clearly visible, use "Unknown" or "None" and a lower confidence.
Count only what you can see - don't assume features on non-visible sides."#;
