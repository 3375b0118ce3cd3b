//! User profile record as consumed by the profile page.
//!
//! The API returns identity fields at the top level and the extended record
//! under a nested `profile` object; the role identifier may sit at either
//! level. Everything is normalised into [`UserProfile`] on deserialisation so
//! the UI never handles the ambiguous wire shape.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::role::Role;
use crate::wire;

/// Every editable or displayable profile field, keyed by its wire name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ProfileField {
    Name,
    Email,
    AdmissionNumber,
    ParentNumber,
    StaffId,
    PhoneNumber,
    Address,
    State,
    LocalGovernment,
    Country,
    Religion,
    BloodGroup,
    Genotype,
    DateOfBirth,
    NextOfKinName,
    NextOfKinPhoneNumber,
    NextOfKinAddress,
}

impl ProfileField {
    pub const IDENTITY: [ProfileField; 2] = [ProfileField::Name, ProfileField::Email];

    /// Role-independent profile fields, in display order.
    pub const DETAILS: [ProfileField; 12] = [
        ProfileField::PhoneNumber,
        ProfileField::Address,
        ProfileField::State,
        ProfileField::LocalGovernment,
        ProfileField::Country,
        ProfileField::Religion,
        ProfileField::BloodGroup,
        ProfileField::Genotype,
        ProfileField::DateOfBirth,
        ProfileField::NextOfKinName,
        ProfileField::NextOfKinPhoneNumber,
        ProfileField::NextOfKinAddress,
    ];

    pub fn key(&self) -> &'static str {
        match self {
            ProfileField::Name => "name",
            ProfileField::Email => "email",
            ProfileField::AdmissionNumber => "admissionNumber",
            ProfileField::ParentNumber => "parentNumber",
            ProfileField::StaffId => "staffId",
            ProfileField::PhoneNumber => "phoneNumber",
            ProfileField::Address => "address",
            ProfileField::State => "state",
            ProfileField::LocalGovernment => "localGovernment",
            ProfileField::Country => "country",
            ProfileField::Religion => "religion",
            ProfileField::BloodGroup => "bloodGroup",
            ProfileField::Genotype => "genotype",
            ProfileField::DateOfBirth => "dateOfBirth",
            ProfileField::NextOfKinName => "nextOfKinName",
            ProfileField::NextOfKinPhoneNumber => "nextOfKinPhoneNumber",
            ProfileField::NextOfKinAddress => "nextOfKinAddress",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ProfileField::Name => "Name",
            ProfileField::Email => "Email",
            ProfileField::AdmissionNumber => "Admission Number",
            ProfileField::ParentNumber => "Parent Number",
            ProfileField::StaffId => "Staff ID",
            ProfileField::PhoneNumber => "Phone Number",
            ProfileField::Address => "Address",
            ProfileField::State => "State",
            ProfileField::LocalGovernment => "Local Government",
            ProfileField::Country => "Country",
            ProfileField::Religion => "Religion",
            ProfileField::BloodGroup => "Blood Group",
            ProfileField::Genotype => "Genotype",
            ProfileField::DateOfBirth => "Date of Birth",
            ProfileField::NextOfKinName => "Next of Kin Name",
            ProfileField::NextOfKinPhoneNumber => "Next of Kin Phone",
            ProfileField::NextOfKinAddress => "Next of Kin Address",
        }
    }

    /// HTML input type used when the field is editable.
    pub fn input_type(&self) -> &'static str {
        match self {
            ProfileField::Email => "email",
            ProfileField::DateOfBirth => "date",
            ProfileField::PhoneNumber | ProfileField::NextOfKinPhoneNumber => "tel",
            _ => "text",
        }
    }

    pub fn is_identifier(&self) -> bool {
        matches!(
            self,
            ProfileField::AdmissionNumber | ProfileField::ParentNumber | ProfileField::StaffId
        )
    }

    pub fn is_next_of_kin(&self) -> bool {
        matches!(
            self,
            ProfileField::NextOfKinName | ProfileField::NextOfKinPhoneNumber | ProfileField::NextOfKinAddress
        )
    }

    /// Fields shown for a user with `role`: identity, the role's identifier
    /// (if it has one), then the role-independent details.
    pub fn visible_for(role: &Role) -> Vec<ProfileField> {
        let mut fields = Vec::with_capacity(Self::IDENTITY.len() + 1 + Self::DETAILS.len());
        fields.extend(Self::IDENTITY);
        fields.extend(role.identifier_field());
        fields.extend(Self::DETAILS);
        fields
    }
}

impl fmt::Display for ProfileField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// Extended personal record nested under `profile`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileDetails {
    #[serde(default, deserialize_with = "wire::optional_text")]
    pub phone_number: Option<String>,
    #[serde(default, deserialize_with = "wire::optional_text")]
    pub address: Option<String>,
    #[serde(default, deserialize_with = "wire::optional_text")]
    pub state: Option<String>,
    #[serde(default, deserialize_with = "wire::optional_text")]
    pub local_government: Option<String>,
    #[serde(default, deserialize_with = "wire::optional_text")]
    pub country: Option<String>,
    #[serde(default, deserialize_with = "wire::optional_text")]
    pub religion: Option<String>,
    #[serde(default, deserialize_with = "wire::optional_text")]
    pub blood_group: Option<String>,
    #[serde(default, deserialize_with = "wire::optional_text")]
    pub genotype: Option<String>,
    #[serde(default, deserialize_with = "wire::optional_text")]
    pub date_of_birth: Option<String>,
    #[serde(default, deserialize_with = "wire::optional_text")]
    pub next_of_kin_name: Option<String>,
    #[serde(default, deserialize_with = "wire::optional_text")]
    pub next_of_kin_phone_number: Option<String>,
    #[serde(default, deserialize_with = "wire::optional_text")]
    pub next_of_kin_address: Option<String>,
    #[serde(default, deserialize_with = "wire::optional_text")]
    pub profile_picture: Option<String>,
}

impl ProfileDetails {
    fn get(&self, field: ProfileField) -> Option<&String> {
        match field {
            ProfileField::PhoneNumber => self.phone_number.as_ref(),
            ProfileField::Address => self.address.as_ref(),
            ProfileField::State => self.state.as_ref(),
            ProfileField::LocalGovernment => self.local_government.as_ref(),
            ProfileField::Country => self.country.as_ref(),
            ProfileField::Religion => self.religion.as_ref(),
            ProfileField::BloodGroup => self.blood_group.as_ref(),
            ProfileField::Genotype => self.genotype.as_ref(),
            ProfileField::DateOfBirth => self.date_of_birth.as_ref(),
            ProfileField::NextOfKinName => self.next_of_kin_name.as_ref(),
            ProfileField::NextOfKinPhoneNumber => self.next_of_kin_phone_number.as_ref(),
            ProfileField::NextOfKinAddress => self.next_of_kin_address.as_ref(),
            _ => None,
        }
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RoleIdentifiers {
    #[serde(default, deserialize_with = "wire::optional_text")]
    admission_number: Option<String>,
    #[serde(default, deserialize_with = "wire::optional_text")]
    parent_number: Option<String>,
    #[serde(default, deserialize_with = "wire::optional_text")]
    staff_id: Option<String>,
}

impl RoleIdentifiers {
    fn get(&self, field: ProfileField) -> Option<&String> {
        match field {
            ProfileField::AdmissionNumber => self.admission_number.as_ref(),
            ProfileField::ParentNumber => self.parent_number.as_ref(),
            ProfileField::StaffId => self.staff_id.as_ref(),
            _ => None,
        }
    }
}

#[derive(Debug, Default, Deserialize)]
struct NestedProfileWire {
    #[serde(flatten)]
    identifiers: RoleIdentifiers,
    #[serde(flatten)]
    details: ProfileDetails,
}

#[derive(Debug, Deserialize)]
struct ProfileEnvelope {
    #[serde(default, alias = "_id", deserialize_with = "wire::optional_text")]
    id: Option<String>,
    #[serde(default, deserialize_with = "wire::text")]
    name: String,
    #[serde(default, deserialize_with = "wire::text")]
    email: String,
    role: Role,
    #[serde(default, rename = "profilePicture", deserialize_with = "wire::optional_text")]
    profile_picture: Option<String>,
    #[serde(flatten)]
    identifiers: RoleIdentifiers,
    #[serde(default)]
    profile: Option<NestedProfileWire>,
}

/// A user's profile, normalised at the fetch boundary.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(from = "ProfileEnvelope")]
pub struct UserProfile {
    pub id: Option<String>,
    pub name: String,
    pub email: String,
    pub role: Role,
    /// Value of the role's identifier field; always `None` for roles without one.
    pub identifier: Option<String>,
    pub details: ProfileDetails,
}

impl From<ProfileEnvelope> for UserProfile {
    fn from(wire: ProfileEnvelope) -> Self {
        let nested = wire.profile.unwrap_or_default();
        let identifier = wire.role.identifier_field().and_then(|field| {
            wire.identifiers
                .get(field)
                .or_else(|| nested.identifiers.get(field))
                .filter(|value| !value.trim().is_empty())
                .cloned()
        });

        let mut details = nested.details;
        if details.profile_picture.is_none() {
            details.profile_picture = wire.profile_picture;
        }

        tracing::trace!(role = %wire.role, has_identifier = identifier.is_some(), "normalised profile");

        UserProfile {
            id: wire.id,
            name: wire.name,
            email: wire.email,
            role: wire.role,
            identifier,
            details,
        }
    }
}

impl UserProfile {
    /// Current value of `field` in the form used for both display and edit
    /// population. Identifier fields not owned by this role yield `None`.
    pub fn value(&self, field: ProfileField) -> Option<String> {
        let raw = match field {
            ProfileField::Name => Some(&self.name),
            ProfileField::Email => Some(&self.email),
            f if f.is_identifier() => {
                if self.role.identifier_field() == Some(f) {
                    self.identifier.as_ref()
                } else {
                    None
                }
            }
            f => self.details.get(f),
        }?;

        if field == ProfileField::DateOfBirth {
            Some(date_only(raw))
        } else {
            Some(raw.clone())
        }
    }

    /// Profile picture reference, or a generated initials avatar.
    pub fn avatar_url(&self) -> String {
        match self.details.profile_picture.as_deref() {
            Some(picture) if !picture.trim().is_empty() => picture.to_string(),
            _ => {
                let name = if self.name.trim().is_empty() { "User" } else { self.name.trim() };
                let encoded = name.split_whitespace().collect::<Vec<_>>().join("+");
                format!("https://ui-avatars.com/api/?name={}", encoded)
            }
        }
    }
}

/// Reduce an ISO timestamp such as `2010-05-04T00:00:00.000Z` to `2010-05-04`.
pub fn date_only(raw: &str) -> String {
    raw.trim().split('T').next().unwrap_or_default().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn student_json() -> &'static str {
        r#"{
            "_id": "u1",
            "name": "Ada Obi",
            "email": "ada@school.test",
            "role": "Student",
            "admissionNumber": "A123",
            "staffId": "S-should-be-ignored",
            "profile": {
                "address": "12 Marina Rd",
                "bloodGroup": "O+",
                "dateOfBirth": "2010-05-04T00:00:00.000Z",
                "nextOfKinName": "Chidi Obi"
            }
        }"#
    }

    #[test]
    fn test_profile_normalisation() {
        let profile: UserProfile = serde_json::from_str(student_json()).unwrap();
        assert_eq!(profile.id.as_deref(), Some("u1"));
        assert_eq!(profile.role, Role::Student);
        assert_eq!(profile.identifier.as_deref(), Some("A123"));
        assert_eq!(profile.details.address.as_deref(), Some("12 Marina Rd"));
        assert_eq!(profile.value(ProfileField::StaffId), None);
        assert_eq!(profile.value(ProfileField::AdmissionNumber).as_deref(), Some("A123"));
    }

    #[test]
    fn test_identifier_may_be_nested() {
        let json = r#"{"name":"T","email":"t@x","role":"Teacher","profile":{"staffId":"ST-9"}}"#;
        let profile: UserProfile = serde_json::from_str(json).unwrap();
        assert_eq!(profile.identifier.as_deref(), Some("ST-9"));
    }

    #[test]
    fn test_profile_without_nested_record() {
        let json = r#"{"name":"P","email":"p@x","role":"Parent","parentNumber":"P-1"}"#;
        let profile: UserProfile = serde_json::from_str(json).unwrap();
        assert_eq!(profile.details, ProfileDetails::default());
        assert_eq!(profile.value(ProfileField::ParentNumber).as_deref(), Some("P-1"));
    }

    #[test]
    fn test_unknown_role_has_no_identifier() {
        let json = r#"{"name":"X","email":"x@x","role":"Bursar","admissionNumber":"A1","staffId":"S1"}"#;
        let profile: UserProfile = serde_json::from_str(json).unwrap();
        assert_eq!(profile.identifier, None);
        for field in [ProfileField::AdmissionNumber, ProfileField::ParentNumber, ProfileField::StaffId] {
            assert_eq!(profile.value(field), None);
        }
    }

    #[test]
    fn test_date_of_birth_is_date_only() {
        let profile: UserProfile = serde_json::from_str(student_json()).unwrap();
        assert_eq!(profile.value(ProfileField::DateOfBirth).as_deref(), Some("2010-05-04"));
        assert_eq!(date_only("2010-05-04"), "2010-05-04");
        assert_eq!(date_only(""), "");
    }

    #[test]
    fn test_visible_fields_by_role() {
        let identifiers = |role: Role| -> Vec<ProfileField> {
            ProfileField::visible_for(&role).into_iter().filter(|f| f.is_identifier()).collect()
        };
        assert_eq!(identifiers(Role::Student), vec![ProfileField::AdmissionNumber]);
        assert_eq!(identifiers(Role::Parent), vec![ProfileField::ParentNumber]);
        assert_eq!(identifiers(Role::Teacher), vec![ProfileField::StaffId]);
        assert_eq!(identifiers(Role::BranchAdmin), vec![ProfileField::StaffId]);
        assert_eq!(identifiers(Role::SuperAdmin), vec![ProfileField::StaffId]);
        assert!(identifiers(Role::Other("Guest".to_string())).is_empty());
        assert_eq!(ProfileField::visible_for(&Role::Other("Guest".to_string())).len(), 14);
    }

    #[test]
    fn test_null_fields_from_api() {
        let json = r#"{
            "_id": null,
            "name": "Ada Obi",
            "email": null,
            "role": "Student",
            "admissionNumber": 1042,
            "profilePicture": null,
            "profile": {"address": null, "phoneNumber": 8031234567, "nextOfKinName": null}
        }"#;
        let profile: UserProfile = serde_json::from_str(json).unwrap();
        assert_eq!(profile.id, None);
        assert_eq!(profile.email, "");
        assert_eq!(profile.value(ProfileField::Email).as_deref(), Some(""));
        assert_eq!(profile.identifier.as_deref(), Some("1042"));
        assert_eq!(profile.details.address, None);
        assert_eq!(profile.value(ProfileField::PhoneNumber).as_deref(), Some("8031234567"));
        assert_eq!(profile.avatar_url(), "https://ui-avatars.com/api/?name=Ada+Obi");
    }

    #[test]
    fn test_next_of_kin_fields_close_the_list() {
        let fields = ProfileField::visible_for(&Role::Teacher);
        let first_kin = fields.iter().position(|f| f.is_next_of_kin()).unwrap();
        assert!(fields[first_kin..].iter().all(|f| f.is_next_of_kin()));
        assert_eq!(fields.len() - first_kin, 3);
    }

    #[test]
    fn test_avatar_url() {
        let mut profile: UserProfile = serde_json::from_str(student_json()).unwrap();
        assert_eq!(profile.avatar_url(), "https://ui-avatars.com/api/?name=Ada+Obi");

        profile.name = " ".to_string();
        assert_eq!(profile.avatar_url(), "https://ui-avatars.com/api/?name=User");

        profile.details.profile_picture = Some("https://cdn.test/a.png".to_string());
        assert_eq!(profile.avatar_url(), "https://cdn.test/a.png");
    }
}
