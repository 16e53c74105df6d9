//! Canned statements for compatibility reports.
//!
//! Every statement is a table lookup keyed by mode and dimension so reports
//! can be asserted exactly.

use super::CompatibilityMode;
use crate::domain::assessment::Dimension;

use CompatibilityMode::*;
use Dimension::*;

/// Gap above which a dimension-specific tip is offered.
pub const TIP_GAP_THRESHOLD: f64 = 25.0;

/// Dimensions with a dedicated tip, in the order tips are considered.
pub const TIP_DIMENSIONS: [Dimension; 4] =
    [Extraversion, Conscientiousness, Openness, EmotionalResilience];

/// Statement shown when a dimension ranks among the pair's strongest.
pub fn strength_statement(mode: CompatibilityMode, dimension: Dimension) -> &'static str {
    match (mode, dimension) {
        (Work, Openness) => "You bring a shared appetite for new ideas to projects.",
        (Work, Conscientiousness) => "You hold each other to the same standard of follow-through.",
        (Work, Extraversion) => "Your social energy splits naturally between client-facing and heads-down work.",
        (Work, Agreeableness) => "You handle disagreements without letting them become personal.",
        (Work, EmotionalResilience) => "You stay steady together when deadlines tighten.",
        (Work, HonestyHumility) => "You can trust each other's candor and credit-sharing.",
        (Work, Adaptability) => "You adjust plans together when priorities shift.",

        (Romantic, Openness) => "You enjoy exploring new experiences together.",
        (Romantic, Conscientiousness) => "You share a similar approach to planning your life together.",
        (Romantic, Extraversion) => "Your social rhythms complement each other.",
        (Romantic, Agreeableness) => "You treat each other with warmth and patience.",
        (Romantic, EmotionalResilience) => "You help each other stay grounded through hard times.",
        (Romantic, HonestyHumility) => "You share a foundation of honesty and mutual respect.",
        (Romantic, Adaptability) => "You roll with life's changes as a team.",

        (Friendship, Openness) => "You never run out of new things to talk about or try.",
        (Friendship, Conscientiousness) => "You can rely on each other to show up when you say you will.",
        (Friendship, Extraversion) => "You balance each other between going out and staying in.",
        (Friendship, Agreeableness) => "Your friendship has an easy, supportive warmth.",
        (Friendship, EmotionalResilience) => "You are a calm presence for each other.",
        (Friendship, HonestyHumility) => "You can be completely straight with each other.",
        (Friendship, Adaptability) => "Spontaneous plans work well for both of you.",

        (Parent, Openness) => "You can share curiosity and discovery with your child.",
        (Parent, Conscientiousness) => "You offer structure that matches your child's needs.",
        (Parent, Extraversion) => "Your social styles give your child room to be themselves.",
        (Parent, Agreeableness) => "Your home has a patient, caring tone.",
        (Parent, EmotionalResilience) => "You model calm responses to setbacks.",
        (Parent, HonestyHumility) => "You build trust through consistent honesty.",
        (Parent, Adaptability) => "You adapt your parenting as your child grows.",

        (Child, Openness) => "You and your parent can learn from each other's perspectives.",
        (Child, Conscientiousness) => "You understand your parent's expectations around responsibility.",
        (Child, Extraversion) => "Your social styles leave space for each of you.",
        (Child, Agreeableness) => "You relate to your parent with goodwill and patience.",
        (Child, EmotionalResilience) => "You and your parent steady each other in difficult moments.",
        (Child, HonestyHumility) => "Your relationship rests on honesty.",
        (Child, Adaptability) => "You handle family changes well together.",
    }
}

/// Statement shown when a dimension ranks among the pair's weakest.
pub fn challenge_statement(mode: CompatibilityMode, dimension: Dimension) -> &'static str {
    match (mode, dimension) {
        (Work, Openness) => "You may disagree on when to innovate and when to stick with proven methods.",
        (Work, Conscientiousness) => "Different standards for planning and detail can cause friction over deliverables.",
        (Work, Extraversion) => "You may clash over how much collaboration versus solo focus the work needs.",
        (Work, Agreeableness) => "One of you may push harder in negotiations than the other is comfortable with.",
        (Work, EmotionalResilience) => "Pressure may affect you very differently, making stressful periods uneven.",
        (Work, HonestyHumility) => "You may see ambition and self-promotion differently.",
        (Work, Adaptability) => "Sudden changes of plan may energize one of you and unsettle the other.",

        (Romantic, Openness) => "One of you may crave novelty while the other values routine.",
        (Romantic, Conscientiousness) => "Household responsibilities and plans may be a recurring source of tension.",
        (Romantic, Extraversion) => "You may need different amounts of social time and time alone.",
        (Romantic, Agreeableness) => "Conflicts may escalate when one of you is more direct than the other.",
        (Romantic, EmotionalResilience) => "You may react to stress differently, which can feel isolating.",
        (Romantic, HonestyHumility) => "Differences in candor or status-seeking may erode trust if left unspoken.",
        (Romantic, Adaptability) => "You may disagree on how quickly to embrace big life changes.",

        (Friendship, Openness) => "You may gravitate toward very different activities and interests.",
        (Friendship, Conscientiousness) => "Punctuality and commitments may be a source of friction.",
        (Friendship, Extraversion) => "One of you may want to socialize much more than the other.",
        (Friendship, Agreeableness) => "Blunt feedback from one of you may land harder than intended.",
        (Friendship, EmotionalResilience) => "You may need different kinds of support when things go wrong.",
        (Friendship, HonestyHumility) => "You may have different views on modesty and fairness.",
        (Friendship, Adaptability) => "Last-minute changes may suit one of you far better than the other.",

        (Parent, Openness) => "Your child's interests may feel unfamiliar to you.",
        (Parent, Conscientiousness) => "Expectations around routines and chores may cause conflict.",
        (Parent, Extraversion) => "Your child may need more or less social stimulation than you naturally provide.",
        (Parent, Agreeableness) => "Discipline may feel harsher or softer than your child expects.",
        (Parent, EmotionalResilience) => "Your child may experience stress very differently than you do.",
        (Parent, HonestyHumility) => "Differences in how you value fairness and modesty may need explaining.",
        (Parent, Adaptability) => "Changes in routine may affect you and your child unevenly.",

        (Child, Openness) => "Your parent may not share your enthusiasm for new ideas.",
        (Child, Conscientiousness) => "Differences in organization may lead to disagreements about responsibilities.",
        (Child, Extraversion) => "You may want a different social life than your parent is comfortable with.",
        (Child, Agreeableness) => "Arguments may escalate when one of you is more confrontational.",
        (Child, EmotionalResilience) => "Your parent may handle stress in ways that are hard for you to relate to.",
        (Child, HonestyHumility) => "You may see honesty and fairness from different angles.",
        (Child, Adaptability) => "Family changes may be harder for one of you than the other.",
    }
}

/// Dimension-specific tip, offered when the pair's gap exceeds the threshold.
pub fn dimension_tip(dimension: Dimension) -> Option<&'static str> {
    match dimension {
        Extraversion => Some(
            "Agree on a balance of social time and quiet time that respects both of your energy levels.",
        ),
        Conscientiousness => {
            Some("Talk openly about expectations for planning, deadlines, and follow-through.")
        }
        Openness => Some("Take turns choosing activities so both novelty and familiarity have a place."),
        EmotionalResilience => Some(
            "Check in with each other during stressful periods rather than assuming you feel the same.",
        ),
        _ => None,
    }
}

/// Mode-level tips used to pad the tip list.
pub fn general_tips(mode: CompatibilityMode) -> [&'static str; 3] {
    match mode {
        Work => [
            "Set clear roles and decision rights at the start of each project.",
            "Schedule regular check-ins to surface concerns early.",
            "Recognize each other's contributions explicitly.",
        ],
        Romantic => [
            "Make time for regular, distraction-free conversations.",
            "Express appreciation for the small things daily.",
            "Approach disagreements as a team solving a problem together.",
        ],
        Friendship => [
            "Keep in touch even when life gets busy.",
            "Be honest about what you need from the friendship.",
            "Celebrate each other's milestones.",
        ],
        Parent => [
            "Listen to understand your child before offering guidance.",
            "Keep routines predictable while allowing age-appropriate independence.",
            "Acknowledge your child's feelings even when you hold a boundary.",
        ],
        Child => [
            "Share what matters to you with your parent, even briefly.",
            "Ask about your parent's perspective before assuming their reasons.",
            "Show appreciation for the support you receive.",
        ],
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn statements_are_distinct_within_a_mode() {
        for mode in CompatibilityMode::ALL {
            let strengths: HashSet<&str> =
                Dimension::ALL.iter().map(|d| strength_statement(mode, *d)).collect();
            let challenges: HashSet<&str> =
                Dimension::ALL.iter().map(|d| challenge_statement(mode, *d)).collect();
            assert_eq!(strengths.len(), 7, "{} strengths", mode);
            assert_eq!(challenges.len(), 7, "{} challenges", mode);
            assert!(strengths.is_disjoint(&challenges));
        }
    }

    #[test]
    fn only_four_dimensions_have_tips() {
        let with_tips: Vec<Dimension> = Dimension::ALL
            .into_iter()
            .filter(|d| dimension_tip(*d).is_some())
            .collect();
        assert_eq!(with_tips.len(), 4);
        for dimension in TIP_DIMENSIONS {
            assert!(dimension_tip(dimension).is_some());
        }
    }

    #[test]
    fn general_tips_are_not_empty() {
        for mode in CompatibilityMode::ALL {
            assert!(general_tips(mode).iter().all(|t| !t.is_empty()));
        }
    }
}
