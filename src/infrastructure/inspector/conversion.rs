use std::collections::HashMap;

use aws_sdk_inspector2::primitives::DateTime as SdkDateTime;
use aws_sdk_inspector2::types::{
    Architecture, AwsEc2InstanceDetails, AwsEcrContainerImageDetails, AwsLambdaFunctionDetails, CodeFilePath,
    CodeRepositoryDetails, CodeRepositoryProviderType, CodeVulnerabilityDetails, CvssScore, CvssScoreAdjustment,
    CvssScoreDetails, EpssDetails, ExploitAvailable, ExploitabilityDetails, Finding as SdkFinding, FindingStatus,
    FindingType, FixAvailable, Image, InspectorScoreDetails, LambdaVpcConfig, NetworkPath, NetworkProtocol,
    NetworkReachabilityDetails, PackageManager, PackageType, PackageVulnerabilityDetails, PortRange, Provider,
    Recommendation, Remediation, Resource, ResourceDetails, ResourceType, Runtime, ServerlessFunction, Severity, Step,
    Vm, VulnerablePackage,
};
use indexmap::IndexMap;
use serde_json::Number;

use crate::domain::finding::{Finding, FindingValue};

/// Builds the opaque document for an SDK finding. Every member of the API
/// shape is carried under its wire name and in wire order; absent optional
/// members are left out rather than written as null.
pub fn finding_to_value(finding: &SdkFinding) -> Finding {
    Document::new()
        .field("findingArn", &finding.finding_arn)
        .field("awsAccountId", &finding.aws_account_id)
        .field("type", &finding.r#type)
        .field("description", &finding.description)
        .field("title", &finding.title)
        .field("remediation", &finding.remediation)
        .field("severity", &finding.severity)
        .field("firstObservedAt", &finding.first_observed_at)
        .field("lastObservedAt", &finding.last_observed_at)
        .field("updatedAt", &finding.updated_at)
        .field("status", &finding.status)
        .field("resources", &finding.resources)
        .field("inspectorScore", &finding.inspector_score)
        .field("inspectorScoreDetails", &finding.inspector_score_details)
        .field("networkReachabilityDetails", &finding.network_reachability_details)
        .field("packageVulnerabilityDetails", &finding.package_vulnerability_details)
        .field("fixAvailable", &finding.fix_available)
        .field("exploitAvailable", &finding.exploit_available)
        .field("exploitabilityDetails", &finding.exploitability_details)
        .field("codeVulnerabilityDetails", &finding.code_vulnerability_details)
        .field("epss", &finding.epss)
        .build()
}

pub(crate) trait ToFindingValue {
    fn to_finding_value(&self) -> Option<FindingValue>;
}

struct Document(IndexMap<String, FindingValue>);

impl Document {
    fn new() -> Self {
        Self(IndexMap::new())
    }

    fn field<T: ToFindingValue + ?Sized>(mut self, key: &str, value: &T) -> Self {
        if let Some(value) = value.to_finding_value() {
            self.0.insert(key.to_string(), value);
        }
        self
    }

    fn build(self) -> FindingValue {
        FindingValue::Map(self.0)
    }
}

impl<T: ToFindingValue> ToFindingValue for Option<T> {
    fn to_finding_value(&self) -> Option<FindingValue> {
        self.as_ref().and_then(T::to_finding_value)
    }
}

impl<T: ToFindingValue> ToFindingValue for Vec<T> {
    fn to_finding_value(&self) -> Option<FindingValue> {
        Some(FindingValue::List(self.iter().filter_map(T::to_finding_value).collect()))
    }
}

impl ToFindingValue for String {
    fn to_finding_value(&self) -> Option<FindingValue> {
        Some(FindingValue::String(self.clone()))
    }
}

impl ToFindingValue for i32 {
    fn to_finding_value(&self) -> Option<FindingValue> {
        Some(FindingValue::Number(Number::from(*self)))
    }
}

impl ToFindingValue for i64 {
    fn to_finding_value(&self) -> Option<FindingValue> {
        Some(FindingValue::Number(Number::from(*self)))
    }
}

// NaN and infinities have no JSON form and are dropped.
impl ToFindingValue for f64 {
    fn to_finding_value(&self) -> Option<FindingValue> {
        Number::from_f64(*self).map(FindingValue::Number)
    }
}

impl ToFindingValue for SdkDateTime {
    fn to_finding_value(&self) -> Option<FindingValue> {
        chrono::DateTime::from_timestamp(self.secs(), self.subsec_nanos()).map(FindingValue::Timestamp)
    }
}

impl ToFindingValue for HashMap<String, String> {
    fn to_finding_value(&self) -> Option<FindingValue> {
        Some(FindingValue::Map(
            self.iter()
                .map(|(k, v)| (k.clone(), FindingValue::String(v.clone())))
                .collect(),
        ))
    }
}

macro_rules! enum_as_string {
    ($($ty:ty),* $(,)?) => {
        $(
            impl ToFindingValue for $ty {
                fn to_finding_value(&self) -> Option<FindingValue> {
                    Some(FindingValue::String(self.as_str().to_string()))
                }
            }
        )*
    };
}

enum_as_string!(
    Architecture,
    CodeRepositoryProviderType,
    ExploitAvailable,
    FindingStatus,
    FindingType,
    FixAvailable,
    NetworkProtocol,
    PackageManager,
    PackageType,
    Provider,
    ResourceType,
    Runtime,
    Severity,
);

/// Maps an SDK struct to a document, one `field` per member.
macro_rules! document {
    ($ty:ty { $($key:literal => $member:ident),* $(,)? }) => {
        impl ToFindingValue for $ty {
            fn to_finding_value(&self) -> Option<FindingValue> {
                Some(Document::new()$(.field($key, &self.$member))*.build())
            }
        }
    };
}

document!(Remediation {
    "recommendation" => recommendation,
});

document!(Recommendation {
    "text" => text,
    "Url" => url,
});

document!(Resource {
    "type" => r#type,
    "id" => id,
    "partition" => partition,
    "region" => region,
    "tags" => tags,
    "details" => details,
    "provider" => provider,
    "providerAccountId" => provider_account_id,
    "providerOrgId" => provider_org_id,
});

document!(ResourceDetails {
    "awsEc2Instance" => aws_ec2_instance,
    "awsEcrContainerImage" => aws_ecr_container_image,
    "awsLambdaFunction" => aws_lambda_function,
    "codeRepository" => code_repository,
    "vm" => vm,
    "image" => image,
    "serverlessFunction" => serverless_function,
});

document!(AwsEc2InstanceDetails {
    "type" => r#type,
    "imageId" => image_id,
    "ipV4Addresses" => ipv4_addresses,
    "ipV6Addresses" => ipv6_addresses,
    "keyName" => key_name,
    "iamInstanceProfileArn" => iam_instance_profile_arn,
    "vpcId" => vpc_id,
    "subnetId" => subnet_id,
    "launchedAt" => launched_at,
    "platform" => platform,
});

document!(AwsEcrContainerImageDetails {
    "repositoryName" => repository_name,
    "imageTags" => image_tags,
    "pushedAt" => pushed_at,
    "author" => author,
    "architecture" => architecture,
    "imageHash" => image_hash,
    "registry" => registry,
    "platform" => platform,
    "lastInUseAt" => last_in_use_at,
    "inUseCount" => in_use_count,
});

document!(AwsLambdaFunctionDetails {
    "functionName" => function_name,
    "runtime" => runtime,
    "codeSha256" => code_sha256,
    "version" => version,
    "executionRoleArn" => execution_role_arn,
    "layers" => layers,
    "vpcConfig" => vpc_config,
    "packageType" => package_type,
    "architectures" => architectures,
    "lastModifiedAt" => last_modified_at,
});

document!(LambdaVpcConfig {
    "subnetIds" => subnet_ids,
    "securityGroupIds" => security_group_ids,
    "vpcId" => vpc_id,
});

document!(CodeRepositoryDetails {
    "projectName" => project_name,
    "integrationArn" => integration_arn,
    "providerType" => provider_type,
});

document!(Vm {
    "type" => r#type,
    "vmName" => vm_name,
    "vmImageReference" => vm_image_reference,
    "ipV4Addresses" => ipv4_addresses,
    "ipV6Addresses" => ipv6_addresses,
    "networkId" => network_id,
    "subnetIds" => subnet_ids,
    "securityGroupIds" => security_group_ids,
    "launchedAt" => launched_at,
    "platform" => platform,
    "executionRole" => execution_role,
    "keyName" => key_name,
});

document!(Image {
    "repositoryName" => repository_name,
    "registry" => registry,
    "imageTags" => image_tags,
    "imageDigest" => image_digest,
    "pushedAt" => pushed_at,
    "architecture" => architecture,
    "author" => author,
    "inUseCount" => in_use_count,
    "lastInUseAt" => last_in_use_at,
    "platform" => platform,
});

document!(ServerlessFunction {
    "serverlessFunctionName" => serverless_function_name,
    "runtime" => runtime,
    "version" => version,
    "codeDigest" => code_digest,
    "lastModifiedAt" => last_modified_at,
    "networkId" => network_id,
    "subnetIds" => subnet_ids,
    "securityGroupIds" => security_group_ids,
    "executionRole" => execution_role,
    "packageType" => package_type,
    "architectures" => architectures,
    "layers" => layers,
});

document!(InspectorScoreDetails {
    "adjustedCvss" => adjusted_cvss,
});

document!(CvssScoreDetails {
    "scoreSource" => score_source,
    "cvssSource" => cvss_source,
    "version" => version,
    "score" => score,
    "scoringVector" => scoring_vector,
    "adjustments" => adjustments,
});

document!(CvssScoreAdjustment {
    "metric" => metric,
    "reason" => reason,
});

document!(NetworkReachabilityDetails {
    "openPortRange" => open_port_range,
    "protocol" => protocol,
    "networkPath" => network_path,
});

document!(PortRange {
    "begin" => begin,
    "end" => end,
});

document!(NetworkPath {
    "steps" => steps,
});

document!(Step {
    "componentId" => component_id,
    "componentType" => component_type,
    "componentArn" => component_arn,
});

document!(PackageVulnerabilityDetails {
    "vulnerabilityId" => vulnerability_id,
    "vulnerablePackages" => vulnerable_packages,
    "source" => source,
    "cvss" => cvss,
    "relatedVulnerabilities" => related_vulnerabilities,
    "sourceUrl" => source_url,
    "vendorSeverity" => vendor_severity,
    "vendorCreatedAt" => vendor_created_at,
    "vendorUpdatedAt" => vendor_updated_at,
    "referenceUrls" => reference_urls,
});

document!(VulnerablePackage {
    "name" => name,
    "version" => version,
    "sourceLayerHash" => source_layer_hash,
    "epoch" => epoch,
    "release" => release,
    "arch" => arch,
    "packageManager" => package_manager,
    "filePath" => file_path,
    "fixedInVersion" => fixed_in_version,
    "remediation" => remediation,
    "sourceLambdaLayerArn" => source_lambda_layer_arn,
});

document!(CvssScore {
    "baseScore" => base_score,
    "scoringVector" => scoring_vector,
    "version" => version,
    "source" => source,
});

document!(ExploitabilityDetails {
    "lastKnownExploitAt" => last_known_exploit_at,
});

document!(CodeVulnerabilityDetails {
    "filePath" => file_path,
    "detectorTags" => detector_tags,
    "referenceUrls" => reference_urls,
    "ruleId" => rule_id,
    "sourceLambdaLayerArn" => source_lambda_layer_arn,
    "detectorId" => detector_id,
    "detectorName" => detector_name,
    "cwes" => cwes,
});

document!(CodeFilePath {
    "fileName" => file_name,
    "filePath" => file_path,
    "startLine" => start_line,
    "endLine" => end_line,
});

document!(EpssDetails {
    "score" => score,
});
